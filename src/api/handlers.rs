//! HTTP request handlers

use super::types::{
    ChatRequest, ChatResponse, ErrorResponse, NewSessionResponse, SessionResponse, SuccessResponse,
};
use super::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use thiserror::Error;

/// Oversized messages are rejected before they reach the dialog.
const MAX_MESSAGE_LEN: usize = 4 * 1024;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Session creation
        .route("/api/sessions/new", post(create_session))
        // Session inspection
        .route("/api/sessions/:id", get(get_session))
        // The chat operation
        .route("/api/sessions/:id/chat", post(chat))
        // Lifecycle
        .route("/api/sessions/:id/reset", post(reset_session))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Session Creation
// ============================================================

/// Mint an opaque visitor identifier. The session record itself is
/// created lazily on the first chat message, so clients may also bring
/// their own stable identifiers straight to `/chat`.
async fn create_session() -> Json<NewSessionResponse> {
    let session_id = uuid::Uuid::new_v4().to_string();
    Json(NewSessionResponse { session_id })
}

// ============================================================
// Session Inspection
// ============================================================

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let stage = state
        .sessions
        .stage(&id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("no session {id}")))?;

    Ok(Json(SessionResponse {
        session_id: id,
        stage,
    }))
}

// ============================================================
// Chat
// ============================================================

async fn chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if req.message.len() > MAX_MESSAGE_LEN {
        return Err(ApiError::BadRequest(format!(
            "message exceeds {MAX_MESSAGE_LEN} bytes"
        )));
    }

    let reply = state.sessions.handle_message(&id, &req.message).await;
    Ok(Json(ChatResponse { reply }))
}

// ============================================================
// Lifecycle
// ============================================================

async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if !state.sessions.remove(&id).await {
        return Err(ApiError::NotFound(format!("no session {id}")));
    }
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================
// Error Handling
// ============================================================

/// Transport-level errors. The dialog itself never fails; invalid
/// visitor input is answered with a re-prompt reply.
#[derive(Debug, Error)]
enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
