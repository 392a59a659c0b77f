//! Reply generation seam.
//!
//! The backend asks a [`Responder`] for the assistant text. The shipped
//! implementation draws from the local fallback corpus; a model-backed
//! responder plugs in behind the same trait. When a responder fails, the
//! handler answers with [`unavailable_reply`] for the category.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use codechat_core::fallback::{CorpusKey, FallbackLibrary};
use codechat_core::types::{Category, SessionId};

/// Why a responder could not produce a reply.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("Responder unavailable: {0}")]
    Unavailable(String),
    #[error("Responder failed: {0}")]
    Failed(String),
}

/// Produces the assistant reply for one user message.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(
        &self,
        message: &str,
        category: Category,
        session_id: &SessionId,
    ) -> Result<String, ResponderError>;
}

/// Reply sent in place of a failed responder's answer.
pub fn unavailable_reply(category: Category) -> &'static str {
    match category {
        Category::Code => "Извините, сервис ИИ временно недоступен. Попробуйте позже или задайте более конкретный вопрос по программированию.",
        Category::Analysis => "Извините, сервис анализа кода временно недоступен. Пожалуйста, попробуйте позже.",
        Category::Text => "Извините, сервис генерации текста временно недоступен. Попробуйте повторить запрос через несколько минут.",
        Category::Error => "Извините, сервис временно недоступен. Попробуйте позже.",
    }
}

/// Answers from the fallback corpus for the message's category.
pub struct CorpusResponder {
    rng: Mutex<StdRng>,
}

impl Default for CorpusResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusResponder {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Reproducible sampling for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl Responder for CorpusResponder {
    async fn respond(
        &self,
        _message: &str,
        category: Category,
        session_id: &SessionId,
    ) -> Result<String, ResponderError> {
        let key = CorpusKey::from(category);
        let reply = match self.rng.lock() {
            Ok(mut rng) => FallbackLibrary::sample_with(key, &mut *rng),
            Err(_) => FallbackLibrary::sample_at(key, 0),
        };
        tracing::debug!(%category, %session_id, "Answered from corpus");
        Ok(reply.to_string())
    }
}
