//! Codechat reference backend - axum HTTP server for the chat exchange
//! contract.
//!
//! Keeps sessions and messages in memory and answers from the fallback
//! corpus, so the client can be run end to end without a model behind it.

pub mod error;
pub mod handlers;
pub mod responder;
pub mod routes;
pub mod state;
pub mod store;

pub use error::ApiError;
pub use responder::{unavailable_reply, CorpusResponder, Responder, ResponderError};
pub use routes::{create_router, serve, start_server};
pub use state::AppState;
