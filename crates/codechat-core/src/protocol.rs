//! Wire types for the chat exchange endpoint and its companion routes.
//!
//! Shared by the HTTP transport (client side) and the reference backend
//! (server side) so both ends agree on field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{flexible_timestamp, Category, Message, MessageId, Role, SessionId};

/// Body of `POST /api/chat/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub category: Category,
    /// Absent asks the server to start a new session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
}

/// Successful reply to a [`ChatRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub id: MessageId,
    pub response: String,
    #[serde(with = "flexible_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub category: Category,
    pub session_id: SessionId,
}

impl ChatReply {
    /// The assistant message this reply becomes on the timeline.
    pub fn into_message(self) -> Message {
        Message {
            id: self.id,
            role: Role::Assistant,
            content: self.response,
            category: self.category,
            timestamp: self.timestamp,
        }
    }
}

/// A stored message as reported by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: MessageId,
    pub session_id: SessionId,
    #[serde(rename = "type")]
    pub role: Role,
    pub content: String,
    pub category: Category,
    #[serde(with = "flexible_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Session metadata as reported by the sessions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub messages: Vec<MessageRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_session_omits_field() {
        let req = ChatRequest {
            message: "привет".into(),
            category: Category::Text,
            session_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({"message": "привет", "category": "text"}));
    }

    #[test]
    fn test_request_accepts_null_session_and_missing_category() {
        let req: ChatRequest =
            serde_json::from_value(json!({"message": "hi", "session_id": null})).unwrap();
        assert_eq!(req.category, Category::Text);
        assert!(req.session_id.is_none());
    }

    #[test]
    fn test_reply_with_numeric_id_and_naive_timestamp() {
        let reply: ChatReply = serde_json::from_value(json!({
            "id": 42,
            "response": "...",
            "timestamp": "2024-05-01T12:00:00.5",
            "category": "code",
            "session_id": "abc"
        }))
        .unwrap();
        assert_eq!(reply.id, MessageId::Remote("42".into()));
        assert_eq!(reply.session_id, SessionId::new("abc"));

        let msg = reply.into_message();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.category, Category::Code);
    }

    #[test]
    fn test_reply_with_unknown_category_is_rejected() {
        let result = serde_json::from_value::<ChatReply>(json!({
            "id": "1",
            "response": "...",
            "timestamp": "2024-05-01T12:00:00Z",
            "category": "poetry",
            "session_id": "abc"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_reply_missing_session_is_rejected() {
        let result = serde_json::from_value::<ChatReply>(json!({
            "id": "1",
            "response": "...",
            "timestamp": "2024-05-01T12:00:00Z",
            "category": "text"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_record_uses_type_field_for_role() {
        let record: MessageRecord = serde_json::from_value(json!({
            "id": "m1",
            "session_id": "s1",
            "type": "ai",
            "content": "ok",
            "category": "analysis",
            "timestamp": "2024-05-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(record.role, Role::Assistant);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["type"], "assistant");
    }
}
