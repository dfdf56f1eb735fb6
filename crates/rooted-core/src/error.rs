//! Error types for the booking backend

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Time slot already booked")]
    SlotTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// Convert to API error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::SlotTaken => "SLOT_TAKEN",
            ApiError::EmailTaken => "EMAIL_TAKEN",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Database(_) => "DATABASE_ERROR",
            ApiError::Serialization(_) => "SERIALIZATION_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SlotTaken | ApiError::EmailTaken => StatusCode::CONFLICT,

            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,

            ApiError::Validation(_) => StatusCode::BAD_REQUEST,

            ApiError::Database(_) | ApiError::Serialization(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
