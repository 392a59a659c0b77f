//! Route handler functions for all API endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use codechat_core::classifier::Classifier;
use codechat_core::protocol::{
    ChatReply, ChatRequest, HistoryResponse, MessageRecord, SessionsResponse,
};
use codechat_core::types::{Category, MessageId, Role, SessionId};

use crate::error::ApiError;
use crate::responder::unavailable_reply;
use crate::state::AppState;

// =============================================================================
// Query parameter types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
    pub uptime_secs: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/ - liveness banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Codechat backend is running!".to_string(),
        status: "healthy".to_string(),
    })
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        sessions: state.store.session_count(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// POST /api/chat/ - one exchange.
///
/// A request tagged `text` is re-classified with the server rule set; `code`
/// and `analysis` are taken as given. `error` is reserved for client-side
/// failure messages and is refused.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message cannot be empty".to_string()));
    }

    let category = match request.category {
        Category::Text => Classifier::server().classify(&request.message),
        Category::Error => {
            return Err(ApiError::BadRequest(
                "category must be one of code, analysis, text".to_string(),
            ))
        }
        other => other,
    };

    let session_id = state.store.get_or_create(request.session_id.as_ref())?;

    state.store.record(MessageRecord {
        id: MessageId::from(Uuid::new_v4().to_string()),
        session_id: session_id.clone(),
        role: Role::User,
        content: request.message.clone(),
        category,
        timestamp: Utc::now(),
    })?;

    tracing::info!(%category, %session_id, "Generating reply");
    let response = match state
        .responder
        .respond(&request.message, category, &session_id)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(%category, %session_id, error = %e, "Responder failed; using fallback reply");
            unavailable_reply(category).to_string()
        }
    };

    let reply = MessageRecord {
        id: MessageId::from(Uuid::new_v4().to_string()),
        session_id: session_id.clone(),
        role: Role::Assistant,
        content: response.clone(),
        category,
        timestamp: Utc::now(),
    };
    let (id, timestamp) = (reply.id.clone(), reply.timestamp);
    state.store.record(reply)?;

    Ok(Json(ChatReply {
        id,
        response,
        timestamp,
        category,
        session_id,
    }))
}

/// GET /api/chat/history/{session_id}
pub async fn history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let limit = params.limit.unwrap_or(state.config.history_limit);
    let id = SessionId::new(session_id);
    let messages = state
        .store
        .history(&id, limit)?
        .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;
    Ok(Json(HistoryResponse { messages }))
}

/// GET /api/chat/sessions
pub async fn sessions(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<Json<SessionsResponse>, ApiError> {
    let limit = params.limit.unwrap_or(state.config.sessions_limit);
    Ok(Json(SessionsResponse {
        sessions: state.store.sessions(limit)?,
    }))
}

/// DELETE /api/chat/session/{session_id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = SessionId::new(session_id);
    if !state.store.delete(&id)? {
        return Err(ApiError::NotFound("Session not found".to_string()));
    }
    tracing::info!(session_id = %id, "Session deleted");
    Ok(Json(DeleteResponse {
        message: "Session deleted successfully".to_string(),
    }))
}
