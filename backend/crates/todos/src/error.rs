//! Todo Error Types
//!
//! Todo-specific error variants integrating with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Todo-specific result type alias
pub type TodoResult<T> = Result<T, TodoError>;

/// Todo-specific error variants
#[derive(Debug, Error)]
pub enum TodoError {
    /// Todo does not exist for this owner (covers ownership misses)
    #[error("Todo not found")]
    NotFound,

    /// Form input failed validation
    #[error("{0}")]
    Validation(String),

    /// Storage error (already classified by the kernel layer)
    #[error("Storage error: {0}")]
    Storage(AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoError::Storage(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            TodoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::NotFound => ErrorKind::NotFound,
            TodoError::Validation(_) => ErrorKind::BadRequest,
            TodoError::Storage(e) => e.kind(),
            TodoError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TodoError::Storage(e) => {
                tracing::error!(error = %e, "Todo storage error");
            }
            TodoError::Internal(msg) => {
                tracing::error!(message = %msg, "Todo internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Todo error");
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Browser flows redirect or re-render instead; this path serves
        // infrastructure failures, so the body stays generic.
        (status, status.canonical_reason().unwrap_or("Error").to_string()).into_response()
    }
}

impl From<sqlx::Error> for TodoError {
    fn from(err: sqlx::Error) -> Self {
        TodoError::Storage(AppError::from(err))
    }
}

impl From<AppError> for TodoError {
    fn from(err: AppError) -> Self {
        TodoError::Storage(err)
    }
}
