//! Session identity tracking.

use codechat_core::types::SessionId;

/// Continuing conversation identity.
///
/// Empty until the first successful exchange; the first id adopted is kept
/// for the rest of the conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    id: Option<SessionId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&SessionId> {
        self.id.as_ref()
    }

    pub fn is_established(&self) -> bool {
        self.id.is_some()
    }

    /// Adopt `id` if no session is established yet.
    ///
    /// Returns `true` when `id` was adopted. A different id offered after
    /// establishment is ignored.
    pub fn adopt(&mut self, id: SessionId) -> bool {
        match &self.id {
            None => {
                tracing::info!(session_id = %id, "Session established");
                self.id = Some(id);
                true
            }
            Some(current) if *current != id => {
                tracing::warn!(
                    session_id = %current,
                    offered = %id,
                    "Server offered a different session id; keeping the established one"
                );
                false
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.id().is_none());
        assert!(!session.is_established());
    }

    #[test]
    fn test_adopt_once() {
        let mut session = Session::new();
        assert!(session.adopt(SessionId::new("abc")));
        assert_eq!(session.id(), Some(&SessionId::new("abc")));
    }

    #[test]
    fn test_adopt_same_id_again_is_noop() {
        let mut session = Session::new();
        session.adopt(SessionId::new("abc"));
        assert!(!session.adopt(SessionId::new("abc")));
        assert_eq!(session.id(), Some(&SessionId::new("abc")));
    }

    #[test]
    fn test_different_id_never_overwrites() {
        let mut session = Session::new();
        session.adopt(SessionId::new("abc"));
        assert!(!session.adopt(SessionId::new("xyz")));
        assert_eq!(session.id(), Some(&SessionId::new("abc")));
    }
}
