//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Error taxonomy of the scoring service.
///
/// Each variant maps to exactly one boundary response so callers never have
/// to string-match failure messages: unavailable model -> 503, client input
/// -> 400, inference fault -> 500.
#[derive(Debug, Error)]
pub enum AppError {
    /// The classifier (or its metadata, where required) is not loaded.
    #[error("model is not loaded")]
    ModelUnavailable,

    /// A transaction attribute is missing or out of its declared range.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A batch request exceeds the per-call transaction limit.
    #[error("batch of {size} transactions exceeds the limit of {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// The classifier call itself failed.
    #[error("inference failed: {0}")]
    Inference(String),

    /// Anything else.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ModelUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            AppError::Validation(_) | AppError::BatchTooLarge { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Inference(msg) => {
                tracing::error!("Inference error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
