//! Profile Error Types
//!
//! Profile-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Profile-specific result type alias
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Profile-specific error variants
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No profile exists for the identity. Reported as 400, matching the
    /// rest of this API surface.
    #[error("There is no profile for this user")]
    NotFound,

    /// Malformed or missing input field
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProfileError::NotFound | ProfileError::Validation(_) => StatusCode::BAD_REQUEST,
            ProfileError::Database(_) | ProfileError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::NotFound | ProfileError::Validation(_) => ErrorKind::BadRequest,
            ProfileError::Database(_) | ProfileError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProfileError::Database(_) | ProfileError::Internal(_) => {
                AppError::new(self.kind(), "Server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "Profile database error");
            }
            ProfileError::Internal(msg) => {
                tracing::error!(message = %msg, "Profile internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Profile error");
            }
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for ProfileError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => ProfileError::Database(e),
            other => ProfileError::Internal(other.to_string()),
        }
    }
}
