//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use codechat_core::config::ServerConfig;

use crate::responder::{CorpusResponder, Responder};
use crate::store::ChatStore;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub store: Arc<ChatStore>,
    pub responder: Arc<dyn Responder>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// State backed by the corpus responder.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_responder(config, Arc::new(CorpusResponder::new()))
    }

    pub fn with_responder(config: ServerConfig, responder: Arc<dyn Responder>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(ChatStore::new()),
            responder,
            start_time: Instant::now(),
        }
    }
}
