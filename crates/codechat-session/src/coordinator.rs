//! Session coordinator: single-flight exchange state machine.
//!
//! Each accepted `send` classifies the text, appends the user turn, moves to
//! `Sending`, awaits the transport, then appends exactly one assistant turn
//! (the server reply or a local error message) and returns to `Idle`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use codechat_core::classifier::Classifier;
use codechat_core::error::{ExchangeFailure, ValidationError};
use codechat_core::fallback::{CorpusKey, FallbackLibrary, APOLOGY};
use codechat_core::protocol::{ChatReply, ChatRequest};
use codechat_core::timeline::Timeline;
use codechat_core::types::{Category, Message, MessageId, SessionId};

use crate::session::Session;
use crate::transport::ChatTransport;

/// Exchange state. Every path out of `Sending` leads back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    Sending,
}

/// Result of a [`SessionCoordinator::send`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input. Nothing was appended.
    Empty,
    /// Another exchange is in flight. The call was ignored.
    Busy,
    /// The server replied and its message was appended.
    Replied(MessageId),
    /// The exchange failed and a local error message was appended.
    Failed(ExchangeFailure),
    /// The user message could not be recorded. Nothing was sent.
    Invalid(ValidationError),
}

impl SendOutcome {
    /// Whether the call started an exchange.
    pub fn was_accepted(&self) -> bool {
        matches!(self, SendOutcome::Replied(_) | SendOutcome::Failed(_))
    }
}

struct Inner {
    state: ExchangeState,
    timeline: Timeline,
    session: Session,
    error: Option<&'static str>,
    next_local_id: u64,
}

impl Inner {
    fn allocate_id(&mut self) -> u64 {
        self.next_local_id += 1;
        self.next_local_id
    }
}

/// Owns the timeline and session for one conversation and drives exchanges
/// through a [`ChatTransport`].
pub struct SessionCoordinator<T> {
    transport: T,
    classifier: Classifier,
    inner: Mutex<Inner>,
}

impl<T: ChatTransport> SessionCoordinator<T> {
    /// Create a coordinator whose timeline opens with a corpus greeting.
    pub fn new(transport: T) -> Self {
        Self::build(transport, Some(FallbackLibrary::sample(CorpusKey::Greeting)))
    }

    /// Create a coordinator with an empty timeline.
    pub fn without_greeting(transport: T) -> Self {
        Self::build(transport, None)
    }

    fn build(transport: T, greeting: Option<&str>) -> Self {
        let mut inner = Inner {
            state: ExchangeState::Idle,
            timeline: Timeline::new(),
            session: Session::new(),
            error: None,
            next_local_id: 0,
        };
        if let Some(text) = greeting {
            let id = inner.allocate_id();
            if let Err(e) = inner
                .timeline
                .append(Message::local_assistant(id, text, Category::Text))
            {
                tracing::error!(error = %e, "Failed to seed greeting");
            }
        }
        Self {
            transport,
            classifier: Classifier::client(),
            inner: Mutex::new(inner),
        }
    }

    /// Send one user message and wait for the exchange to settle.
    ///
    /// Blank input and calls made while another exchange is in flight are
    /// no-ops. Dropping the returned future mid-flight abandons the
    /// exchange: the coordinator returns to `Idle` and nothing further is
    /// appended.
    pub async fn send(&self, raw_text: &str) -> SendOutcome {
        if raw_text.trim().is_empty() {
            tracing::debug!("Ignoring blank message");
            return SendOutcome::Empty;
        }

        let request = match self.begin(raw_text) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let _sending = SendingGuard { inner: &self.inner };
        let result = self.transport.exchange(&request).await;
        self.finish(result)
    }

    fn begin(&self, raw_text: &str) -> Result<ChatRequest, SendOutcome> {
        let mut inner = self.lock();
        if inner.state == ExchangeState::Sending {
            tracing::debug!("Exchange in flight; ignoring send");
            return Err(SendOutcome::Busy);
        }

        let category = self.classifier.classify(raw_text);
        let id = inner.allocate_id();
        if let Err(e) = inner
            .timeline
            .append(Message::user(id, raw_text, category))
        {
            tracing::error!(error = %e, "Failed to record user message");
            return Err(SendOutcome::Invalid(e));
        }

        inner.state = ExchangeState::Sending;
        inner.error = None;

        let session_id = inner.session.id().cloned();
        tracing::info!(
            %category,
            message_id = id,
            session_id = session_id.as_ref().map(|s| s.as_str()).unwrap_or("-"),
            "Sending message"
        );

        Ok(ChatRequest {
            message: raw_text.to_string(),
            category,
            session_id,
        })
    }

    fn finish(&self, result: Result<ChatReply, ExchangeFailure>) -> SendOutcome {
        let mut inner = self.lock();

        let failure = match result {
            Ok(reply) => {
                let session_id = reply.session_id.clone();
                match inner
                    .timeline
                    .append(reply.into_message())
                    .map(|m| m.id.clone())
                {
                    Ok(id) => {
                        inner.session.adopt(session_id);
                        tracing::info!(message_id = %id, "Reply received");
                        return SendOutcome::Replied(id);
                    }
                    Err(e) => ExchangeFailure::from(e),
                }
            }
            Err(failure) => failure,
        };

        tracing::warn!(error = %failure, "Exchange failed");
        inner.error = Some(failure.indicator());
        let id = inner.allocate_id();
        if let Err(e) = inner
            .timeline
            .append(Message::local_assistant(id, APOLOGY, Category::Error))
        {
            tracing::error!(error = %e, "Failed to record error message");
        }
        SendOutcome::Failed(failure)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> ExchangeState {
        self.lock().state
    }

    pub fn is_sending(&self) -> bool {
        self.state() == ExchangeState::Sending
    }

    /// Session id adopted from the first successful exchange, if any.
    pub fn session_id(&self) -> Option<SessionId> {
        self.lock().session.id().cloned()
    }

    /// Indicator left by the last failed exchange, cleared by the next send.
    pub fn error(&self) -> Option<&'static str> {
        self.lock().error
    }

    /// Snapshot of the timeline in insertion order.
    pub fn messages(&self) -> Vec<Message> {
        self.lock().timeline.all().to_vec()
    }

    pub fn last_message(&self) -> Option<Message> {
        self.lock().timeline.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().timeline.is_empty()
    }
}

/// Puts the coordinator back to `Idle` when an exchange settles or its
/// future is dropped.
struct SendingGuard<'a> {
    inner: &'a Mutex<Inner>,
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.state = ExchangeState::Idle;
    }
}
