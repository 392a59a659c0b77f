//! In-memory session and message store for the reference backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use codechat_core::protocol::{MessageRecord, SessionSummary};
use codechat_core::types::SessionId;

use crate::error::ApiError;

#[derive(Default)]
struct StoreInner {
    sessions: HashMap<SessionId, SessionSummary>,
    messages: HashMap<SessionId, Vec<MessageRecord>>,
}

/// Sessions and their messages, keyed by session id.
#[derive(Default)]
pub struct ChatStore {
    inner: Mutex<StoreInner>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, ApiError> {
        self.inner
            .lock()
            .map_err(|e| ApiError::Internal(format!("store lock poisoned: {}", e)))
    }

    /// Return `requested` if it names a known session (touching its
    /// `updated_at`), otherwise create a fresh session.
    pub fn get_or_create(&self, requested: Option<&SessionId>) -> Result<SessionId, ApiError> {
        let mut inner = self.lock()?;
        let now = Utc::now();

        if let Some(id) = requested {
            if let Some(summary) = inner.sessions.get_mut(id) {
                summary.updated_at = now;
                return Ok(id.clone());
            }
            tracing::debug!(session_id = %id, "Unknown session requested; starting a new one");
        }

        let id = SessionId::new(Uuid::new_v4().to_string());
        inner.sessions.insert(
            id.clone(),
            SessionSummary {
                id: id.clone(),
                created_at: now,
                updated_at: now,
                message_count: 0,
            },
        );
        tracing::info!(session_id = %id, "Session created");
        Ok(id)
    }

    /// Store a message under its session.
    pub fn record(&self, record: MessageRecord) -> Result<(), ApiError> {
        let mut inner = self.lock()?;
        let summary = inner
            .sessions
            .get_mut(&record.session_id)
            .ok_or_else(|| ApiError::NotFound(format!("session {}", record.session_id)))?;
        summary.message_count += 1;
        summary.updated_at = Utc::now();
        inner
            .messages
            .entry(record.session_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    /// Oldest-first messages for `id`, at most `limit`. `None` if unknown.
    pub fn history(
        &self,
        id: &SessionId,
        limit: usize,
    ) -> Result<Option<Vec<MessageRecord>>, ApiError> {
        let inner = self.lock()?;
        if !inner.sessions.contains_key(id) {
            return Ok(None);
        }
        let mut messages = inner.messages.get(id).cloned().unwrap_or_default();
        messages.sort_by_key(|m| m.timestamp);
        messages.truncate(limit);
        Ok(Some(messages))
    }

    /// Most recently updated sessions first, at most `limit`.
    pub fn sessions(&self, limit: usize) -> Result<Vec<SessionSummary>, ApiError> {
        let inner = self.lock()?;
        let mut sessions: Vec<SessionSummary> = inner.sessions.values().cloned().collect();
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        sessions.truncate(limit);
        Ok(sessions)
    }

    /// Remove a session and its messages. Returns whether it existed.
    pub fn delete(&self, id: &SessionId) -> Result<bool, ApiError> {
        let mut inner = self.lock()?;
        inner.messages.remove(id);
        Ok(inner.sessions.remove(id).is_some())
    }

    pub fn session_count(&self) -> usize {
        self.inner.lock().map(|i| i.sessions.len()).unwrap_or(0)
    }
}
