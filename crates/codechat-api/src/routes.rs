//! Router setup with all API routes and middleware.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use codechat_core::error::CodechatError;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
///
/// Both the slash and no-slash forms of the collection paths are routed so
/// clients built against either spelling work.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/chat", post(handlers::send_message))
        .route("/api/chat/", post(handlers::send_message))
        .route("/api/chat/history/{session_id}", get(handlers::history))
        .route("/api/chat/sessions", get(handlers::sessions))
        .route(
            "/api/chat/session/{session_id}",
            delete(handlers::delete_session),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `host:port` and serve until the process exits.
pub async fn start_server(host: &str, port: u16, state: AppState) -> Result<(), CodechatError> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CodechatError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Starting chat backend on {}", addr);
    serve(listener, state).await
}

/// Serve on an already bound listener.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<(), CodechatError> {
    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| CodechatError::Server(format!("Server error: {}", e)))
}
