//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// JSON error body returned for every failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Client omitted required fields
    InvalidRequest(String),
    /// Referenced state or village absent
    NotFound(String),
    /// The generative API failed or returned unusable content
    Upstream(String),
    /// Local file-system or parse failure unrelated to user input
    Internal(String),
}

impl AppError {
    /// Log a failed local operation and surface it as a 500.
    ///
    /// `message` is the generic text sent to the caller; the underlying
    /// error stays in the server log only.
    pub fn internal(
        operation: &'static str,
        err: impl std::fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        error!(operation, error = %err, "operation failed");
        AppError::Internal(message.into())
    }

    /// Log a failed upstream call and surface it as a 500.
    pub fn upstream(
        operation: &'static str,
        err: impl std::fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        error!(operation, error = %err, "upstream call failed");
        AppError::Upstream(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_client_error() {
            warn!(status = %status, "{}", message);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::InvalidRequest("a".to_string()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("b".to_string()), StatusCode::NOT_FOUND),
            (AppError::Upstream("c".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Internal("d".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
