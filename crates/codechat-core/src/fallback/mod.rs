//! Local fallback replies.
//!
//! A static corpus of sample replies per category, used for the opening
//! greeting and by the reference backend in place of a live model. Failed
//! exchanges do not sample from it; they get [`APOLOGY`].

mod corpus;

use rand::Rng;

use crate::types::Category;

/// Fixed body of the local message appended when an exchange fails.
pub const APOLOGY: &str = "Извините, произошла ошибка при обращении к ИИ. \
Проверьте подключение к интернету и попробуйте еще раз.";

/// Index into the fallback corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CorpusKey {
    Code,
    Analysis,
    Text,
    Greeting,
}

impl CorpusKey {
    /// Look a key up by name. Unrecognized names map to `Text`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "code" => CorpusKey::Code,
            "analysis" => CorpusKey::Analysis,
            "greeting" => CorpusKey::Greeting,
            _ => CorpusKey::Text,
        }
    }
}

impl From<Category> for CorpusKey {
    fn from(category: Category) -> Self {
        match category {
            Category::Code => CorpusKey::Code,
            Category::Analysis => CorpusKey::Analysis,
            Category::Text | Category::Error => CorpusKey::Text,
        }
    }
}

/// Read-only access to the built-in corpus.
pub struct FallbackLibrary;

impl FallbackLibrary {
    /// Candidate replies for `key`, in corpus order. Never empty.
    pub fn candidates(key: CorpusKey) -> &'static [&'static str] {
        match key {
            CorpusKey::Code => corpus::CODE,
            CorpusKey::Analysis => corpus::ANALYSIS,
            CorpusKey::Text => corpus::TEXT,
            CorpusKey::Greeting => corpus::GREETING,
        }
    }

    /// Pick a reply uniformly at random using the thread-local generator.
    pub fn sample(key: CorpusKey) -> &'static str {
        Self::sample_with(key, &mut rand::rng())
    }

    /// Pick a reply uniformly at random using `rng`.
    pub fn sample_with<R: Rng + ?Sized>(key: CorpusKey, rng: &mut R) -> &'static str {
        let candidates = Self::candidates(key);
        candidates[rng.random_range(0..candidates.len())]
    }

    /// Pick the reply at `index`, wrapping around the candidate list.
    pub fn sample_at(key: CorpusKey, index: usize) -> &'static str {
        let candidates = Self::candidates(key);
        candidates[index % candidates.len()]
    }

    /// Sample by category name; unknown names use the `text` corpus.
    pub fn sample_named(name: &str) -> &'static str {
        Self::sample(CorpusKey::from_name(name))
    }
}

/// Sample a reply for `category` from the corpus.
pub fn sample(category: Category) -> &'static str {
    FallbackLibrary::sample(category.into())
}
