//! Conversation session engine.
//!
//! Drives single-flight exchanges against a remote chat endpoint, keeps the
//! append-only timeline and holds on to the server-issued session id.

pub mod coordinator;
pub mod http;
pub mod session;
pub mod transport;

pub use coordinator::{ExchangeState, SendOutcome, SessionCoordinator};
pub use http::HttpTransport;
pub use session::Session;
pub use transport::{ChatTransport, OfflineTransport};
