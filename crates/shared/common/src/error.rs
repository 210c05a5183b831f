//! Unified error handling.
//!
//! Provides a single error type shared by the services and the HTTP
//! surface, with an Axum response mapping.
//!
//! The services themselves only ever produce two kinds: `Unauthorized`
//! (bad or unknown credentials at login, deliberately collapsed into one
//! kind) and `Storage` (the backing store failed). The remaining variants
//! belong to the HTTP boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or unknown credentials. Unknown email and wrong password both
    /// map here; callers cannot tell them apart.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Request payload rejected at the boundary.
    #[error("{0}")]
    Validation(String),

    /// The credential store failed (connectivity, schema absence, or a
    /// constraint violation such as a duplicate email).
    #[cfg(feature = "database")]
    #[error("Storage unavailable")]
    Storage(#[from] sea_orm::DbErr),

    /// Token signing failed.
    #[cfg(feature = "jwt")]
    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Internal error.
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Storage(_) => "STORAGE_UNAVAILABLE",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "TOKEN_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            #[cfg(feature = "database")]
            AppError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal/security errors
            #[cfg(feature = "database")]
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                "Storage is unavailable".to_string()
            }
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::error!("Token signing error: {:?}", e);
                "Token could not be issued".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
