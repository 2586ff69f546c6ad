//! Error types for the drafting server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Draft Error Enum ==
/// Unified error type for the drafting server.
#[derive(Error, Debug)]
pub enum DraftError {
    /// Invalid request data (blank context, unparseable body)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for DraftError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            DraftError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            DraftError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the drafting server.
pub type Result<T> = std::result::Result<T, DraftError>;
