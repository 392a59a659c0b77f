use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

// =============================================================================
// Enums
// =============================================================================

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Typed by the person at the keyboard.
    User,
    /// Produced by the remote assistant, or synthesized locally in its place.
    #[serde(alias = "ai")]
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" | "ai" => Ok(Role::Assistant),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

/// Semantic category attached to every message.
///
/// `Error` is never produced by classification; it marks locally synthesized
/// replies for failed exchanges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Code,
    Analysis,
    #[default]
    Text,
    Error,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Code,
        Category::Analysis,
        Category::Text,
        Category::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Code => "code",
            Category::Analysis => "analysis",
            Category::Text => "text",
            Category::Error => "error",
        }
    }

    /// Badge label shown next to a message.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Code => "Код",
            Category::Analysis => "Анализ",
            Category::Text => "Текст",
            Category::Error => "Ошибка",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Identifiers
// =============================================================================

/// Message identifier.
///
/// Local turns (user input, greeting, error replies) get a monotonically
/// increasing counter; assistant replies carry whatever opaque id the server
/// assigned. Deserialized ids are always `Remote`, whatever their text, so a
/// server id can never collide with a local one. Numeric server ids are kept
/// in their decimal form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageId {
    Local(u64),
    Remote(String),
}

impl MessageId {
    pub fn is_local(&self) -> bool {
        matches!(self, MessageId::Local(_))
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Local(n) => write!(f, "local-{}", n),
            MessageId::Remote(id) => f.write_str(id),
        }
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        MessageId::Remote(id.to_string())
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        MessageId::Remote(id)
    }
}

impl Serialize for MessageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MessageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => MessageId::Remote(s),
            RawId::Signed(n) => MessageId::Remote(n.to_string()),
            RawId::Unsigned(n) => MessageId::Remote(n.to_string()),
        })
    }
}

/// Opaque conversation identity issued by the server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Message
// =============================================================================

/// One turn in the conversation.
///
/// Messages are never edited once created; the timeline only hands out
/// shared references to them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// A user turn stamped with the client clock.
    pub fn user(id: u64, content: impl Into<String>, category: Category) -> Self {
        Self {
            id: MessageId::Local(id),
            role: Role::User,
            content: content.into(),
            category,
            timestamp: Utc::now(),
        }
    }

    /// An assistant turn produced on this side of the wire.
    pub fn local_assistant(id: u64, content: impl Into<String>, category: Category) -> Self {
        Self {
            id: MessageId::Local(id),
            role: Role::Assistant,
            content: content.into(),
            category,
            timestamp: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == Category::Error
    }
}

// =============================================================================
// Timestamp parsing
// =============================================================================

/// Deserializer for server timestamps.
///
/// Accepts RFC 3339 values with an offset as well as naive ISO-8601 values
/// (`2024-05-01T12:00:00.123456`), which are taken to be UTC.
pub mod flexible_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_is_validation_error() {
        let err = "poetry".parse::<Category>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("poetry".to_string()));
    }

    #[test]
    fn test_category_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Category::Analysis).unwrap(), "\"analysis\"");
        let parsed: Category = serde_json::from_str("\"code\"").unwrap();
        assert_eq!(parsed, Category::Code);
        assert!(serde_json::from_str::<Category>("\"Code\"").is_err());
    }

    #[test]
    fn test_role_accepts_ai_alias() {
        assert_eq!("ai".parse::<Role>().unwrap(), Role::Assistant);
        let parsed: Role = serde_json::from_str("\"ai\"").unwrap();
        assert_eq!(parsed, Role::Assistant);
        assert!(matches!(
            "bot".parse::<Role>(),
            Err(ValidationError::UnknownRole(_))
        ));
    }

    #[test]
    fn test_message_id_accepts_numbers_and_strings() {
        let numeric: MessageId = serde_json::from_str("42").unwrap();
        assert_eq!(numeric, MessageId::Remote("42".to_string()));

        let text: MessageId = serde_json::from_str("\"3f2a\"").unwrap();
        assert_eq!(text, MessageId::Remote("3f2a".to_string()));
    }

    #[test]
    fn test_local_message_id_display() {
        assert_eq!(MessageId::Local(7).to_string(), "local-7");
        assert_eq!(serde_json::to_string(&MessageId::Local(7)).unwrap(), "\"local-7\"");
        assert!(MessageId::Local(7).is_local());
        assert!(!MessageId::from("7").is_local());

        // Wire ids are always the server's; they never enter the local space.
        let wire: MessageId = serde_json::from_str("\"local-7\"").unwrap();
        assert_eq!(wire, MessageId::Remote("local-7".to_string()));
        assert_ne!(wire, MessageId::Local(7));
    }

    #[test]
    fn test_session_id_is_transparent() {
        let id = SessionId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn test_flexible_timestamp_rfc3339() {
        let ts = flexible_timestamp::parse("2024-05-01T12:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_flexible_timestamp_naive_is_utc() {
        let ts = flexible_timestamp::parse("2024-05-01T12:30:00.123456").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 12);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn test_flexible_timestamp_rejects_garbage() {
        assert!(flexible_timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_user_message_constructor() {
        let msg = Message::user(3, "hi", Category::Text);
        assert_eq!(msg.id, MessageId::Local(3));
        assert_eq!(msg.role, Role::User);
        assert!(!msg.is_error());
    }
}
