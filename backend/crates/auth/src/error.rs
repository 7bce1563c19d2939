//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (unknown user or wrong password - never distinguished)
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Username or email already registered
    #[error("Username or email is already registered")]
    DuplicateUser,

    /// Password and confirmation did not match
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Form input failed validation
    #[error("{0}")]
    Validation(String),

    /// Password policy violation
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Token issuance failed (signing error)
    #[error("Failed to issue session token")]
    TokenIssue,

    /// Storage error (already classified by the kernel layer)
    #[error("Storage error: {0}")]
    Storage(AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::DuplicateUser => StatusCode::CONFLICT,
            AuthError::PasswordMismatch
            | AuthError::Validation(_)
            | AuthError::PasswordValidation(_) => StatusCode::BAD_REQUEST,
            AuthError::Storage(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AuthError::TokenIssue | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::DuplicateUser => ErrorKind::Conflict,
            AuthError::PasswordMismatch
            | AuthError::Validation(_)
            | AuthError::PasswordValidation(_) => ErrorKind::BadRequest,
            AuthError::Storage(e) => e.kind(),
            AuthError::TokenIssue | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Auth storage error");
            }
            AuthError::TokenIssue => {
                tracing::error!("Session token issuance failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Browser-facing flows re-render forms instead; this path is for
        // infrastructure failures only, so keep the body generic.
        (status, status.canonical_reason().unwrap_or("Error").to_string()).into_response()
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        // Classification (including 23505 -> Conflict) lives in the kernel
        // layer so a store-raised uniqueness violation is indistinguishable
        // from the controller's own duplicate pre-check.
        let app = AppError::from(err);
        if app.kind() == ErrorKind::Conflict {
            AuthError::DuplicateUser
        } else {
            AuthError::Storage(app)
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Storage(err)
    }
}
