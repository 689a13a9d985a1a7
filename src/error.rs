//! Domain error types for the GSD assessment server.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::store::StoreKind;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Uniqueness violation on a user account
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Foreign id that does not resolve to a live record
    #[error("Dangling reference: {store} {id} does not exist")]
    DanglingReference { store: StoreKind, id: u64 },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Registry state could not be accessed
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a missing record of the given store.
    pub fn not_found(store: StoreKind, id: u64) -> Self {
        AppError::NotFound(format!("{} {}", store, id))
    }

    /// Machine-readable error code used in response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DuplicateKey(_) => "DUPLICATE_KEY",
            AppError::DanglingReference { .. } => "DANGLING_REFERENCE",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, response_message) = match self {
            AppError::Internal(err_str) => {
                tracing::error!("Internal error: {}", err_str);
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::NotFound(_) => (actix_web::http::StatusCode::NOT_FOUND, self.to_string()),
            AppError::DuplicateKey(_)
            | AppError::DanglingReference { .. }
            | AppError::InvalidInput(_) => {
                (actix_web::http::StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: response_message,
        })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        AppError::Internal(format!("Registry lock poisoned: {}", err))
    }
}
