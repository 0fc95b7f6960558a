//! Post Error Types
//!
//! Post-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Post-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Post absent, or the id is not a structurally valid identifier.
    /// Reported as 400, matching the rest of this API surface.
    #[error("Post not found")]
    NotFound,

    /// Author filter got a malformed user id
    #[error("Invalid user id")]
    InvalidUserId,

    /// Requester already appears in the like set
    #[error("You have already liked this post")]
    AlreadyLiked,

    /// Requester does not appear in the like set
    #[error("You have not liked this post")]
    NotLiked,

    /// Comment id not present in the post's comment list
    #[error("Comment not found")]
    CommentNotFound,

    /// Ownership mismatch: requester is not the post/comment author
    #[error("Not authorized")]
    NotAuthorized,

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

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::NotFound
            | PostError::InvalidUserId
            | PostError::AlreadyLiked
            | PostError::NotLiked
            | PostError::Validation(_) => StatusCode::BAD_REQUEST,
            PostError::CommentNotFound => StatusCode::NOT_FOUND,
            PostError::NotAuthorized => StatusCode::UNAUTHORIZED,
            PostError::Database(_) | PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::NotFound
            | PostError::InvalidUserId
            | PostError::AlreadyLiked
            | PostError::NotLiked
            | PostError::Validation(_) => ErrorKind::BadRequest,
            PostError::CommentNotFound => ErrorKind::NotFound,
            PostError::NotAuthorized => ErrorKind::Unauthorized,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            PostError::Database(_) | PostError::Internal(_) => {
                AppError::new(self.kind(), "Server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Post internal error");
            }
            PostError::NotAuthorized => {
                tracing::warn!("Post mutation by non-owner rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Post error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for PostError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => PostError::Database(e),
            other => PostError::Internal(other.to_string()),
        }
    }
}
