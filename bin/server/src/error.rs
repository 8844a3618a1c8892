//! Domain error types for server operations.
//!
//! Variants carry the detail needed for logs; the HTTP responses expose
//! only a user-safe message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

/// Workflow-related errors.
#[derive(Debug)]
pub enum WorkflowError {
    /// Workflow was not found.
    NotFound { id: String },
    /// Invalid workflow ID format.
    InvalidId { id: String, reason: String },
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "workflow '{}' not found", id),
            Self::InvalidId { id, reason } => {
                write!(f, "invalid workflow id '{}': {}", id, reason)
            }
        }
    }
}

impl std::error::Error for WorkflowError {}

impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "Workflow not found"),
            Self::InvalidId { .. } => (StatusCode::BAD_REQUEST, "Invalid workflow ID"),
        };
        tracing::debug!(error = %self, "request failed");
        (status, Json(json!({ "message": message }))).into_response()
    }
}
