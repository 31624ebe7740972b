//! Application error handling
//!
//! Domain failures (missing fields, unknown user) are reported with
//! `200 OK` and an `{ "error": ... }` body; clients tell success from
//! failure by the body alone. Only bodies that cannot be decoded at all
//! get a non-2xx status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use exercise_log_shared::types::ErrorResponse;
use thiserror::Error;
use tracing::warn;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::NotFound(_) => StatusCode::OK,
            ApiError::BadRequest(msg) => {
                warn!(error = %msg, "Rejected malformed request body");
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
