//! Unified error type for API handlers
//!
//! Every failure a handler can surface maps onto one of four variants with
//! a stable HTTP status. All of them render the same JSON envelope:
//! `{"success": false, "error": "..."}`. Internal details are logged, not
//! returned to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::db::DbExecutorError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed validation. The message names the offending field.
    #[error("{0}")]
    BadRequest(String),
    /// Requested entity does not exist.
    #[error("{0}")]
    NotFound(String),
    /// An external provider call failed. The provider's message is surfaced.
    #[error("{0}")]
    Upstream(String),
    /// Unexpected internal failure. The detail stays in the log.
    #[error("An internal error occurred")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// Validation error for a required field that was missing or blank.
    pub fn missing_field(field: &str) -> Self {
        Self::BadRequest(format!("{} is required", field))
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(detail = %detail, "request failed with internal error");
        }
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<DbExecutorError> for ApiError {
    fn from(e: DbExecutorError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::bad_request("q is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found("Article not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::upstream("provider timeout").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::internal("downcast failure").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = ApiError::internal("table articles is missing");
        assert_eq!(err.to_string(), "An internal error occurred");
    }

    #[test]
    fn test_missing_field_message() {
        let err = ApiError::missing_field("question");
        assert_eq!(err.to_string(), "question is required");
    }

    #[test]
    fn test_envelope_shape() {
        let body = ErrorBody {
            success: false,
            error: "q is required".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "q is required");
    }
}
