use thiserror::Error;

use crate::types::MessageId;

/// User-facing indicator surfaced after a failed exchange.
pub const CONNECTION_INDICATOR: &str = "Ошибка подключения к ИИ. Попробуйте еще раз.";

/// A structurally invalid message was offered to the timeline.
///
/// This is a contract violation by the caller, never a network condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate message id: {0}")]
    DuplicateId(MessageId),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Any failure of the remote exchange.
///
/// The session coordinator recovers from all of these locally; they are
/// never differentiated beyond logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeFailure {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned status {status}")]
    Status { status: u16 },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("reply rejected: {0}")]
    Rejected(#[from] ValidationError),
}

impl ExchangeFailure {
    /// Every exchange failure leaves the conversation usable, so a retry is
    /// always allowed.
    pub fn is_retryable(&self) -> bool {
        true
    }

    pub fn indicator(&self) -> &'static str {
        CONNECTION_INDICATOR
    }
}

/// Top-level error type for the Codechat workspace.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodechatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Exchange failed: {0}")]
    Exchange(#[from] ExchangeFailure),
}

impl From<toml::de::Error> for CodechatError {
    fn from(err: toml::de::Error) -> Self {
        CodechatError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CodechatError {
    fn from(err: toml::ser::Error) -> Self {
        CodechatError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CodechatError {
    fn from(err: serde_json::Error) -> Self {
        CodechatError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Codechat operations.
pub type Result<T> = std::result::Result<T, CodechatError>;
