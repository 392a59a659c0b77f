pub mod classifier;
pub mod config;
pub mod error;
pub mod fallback;
pub mod protocol;
pub mod timeline;
pub mod types;

pub use classifier::{classify, Classifier};
pub use config::CodechatConfig;
pub use error::{CodechatError, ExchangeFailure, Result, ValidationError};
pub use fallback::{CorpusKey, FallbackLibrary, APOLOGY};
pub use timeline::Timeline;
pub use types::*;
