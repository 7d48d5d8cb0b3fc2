//! API request and response types

use crate::state_machine::Stage;
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response with the assistant's reply. The reply may contain
/// `<a href=…>` and `<br/>` markup for direct rendering.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Response with a freshly minted session identifier
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
}

/// Response with a session's current dialog stage
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub stage: Stage,
}

/// Response for lifecycle actions
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
