//! Notice Error Types
//!
//! This module provides notice-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Notice-specific result type alias
pub type NoticeResult<T> = Result<T, NoticeError>;

/// Notice-specific error variants
#[derive(Debug, Error)]
pub enum NoticeError {
    /// Missing or invalid field
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No notice with that id
    #[error("Notice not found")]
    NotFound,

    /// The authenticated poster is not in the credential store
    #[error("Poster does not exist")]
    UnknownPoster,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NoticeError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NoticeError::Validation(_) => ErrorKind::BadRequest,
            NoticeError::NotFound => ErrorKind::NotFound,
            NoticeError::UnknownPoster => ErrorKind::Unauthorized,
            NoticeError::Database(_) | NoticeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError with a message that is safe to show the caller
    pub fn into_app_error(self) -> AppError {
        match self {
            NoticeError::Validation(msg) => AppError::bad_request(msg),
            NoticeError::NotFound => AppError::not_found("Notice not found"),
            NoticeError::UnknownPoster => AppError::unauthorized("Authentication required")
                .with_action("Please sign in again"),
            NoticeError::Database(e) => AppError::from(e),
            NoticeError::Internal(_) => AppError::internal("Internal server error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            NoticeError::Database(e) => {
                tracing::error!(error = %e, "Notice database error");
            }
            NoticeError::Internal(msg) => {
                tracing::error!(message = %msg, "Notice internal error");
            }
            NoticeError::UnknownPoster => {
                tracing::warn!("Notice write by unknown user");
            }
            _ => {
                tracing::debug!(error = %self, "Notice error");
            }
        }
    }
}

impl IntoResponse for NoticeError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for NoticeError {
    fn from(rejection: JsonRejection) -> Self {
        NoticeError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for NoticeError {
    fn from(rejection: QueryRejection) -> Self {
        NoticeError::Validation(rejection.body_text())
    }
}

/// Value objects report validation failures as 400 `AppError`s
impl From<AppError> for NoticeError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => NoticeError::Validation(err.message().to_string()),
            ErrorKind::NotFound => NoticeError::NotFound,
            _ => NoticeError::Internal(err.to_string()),
        }
    }
}

/// Poster lookups go through the credential store
impl From<AuthError> for NoticeError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => NoticeError::Database(e),
            other => NoticeError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(NoticeError::Validation("x".into()).kind().status_code(), 400);
        assert_eq!(NoticeError::NotFound.kind().status_code(), 404);
        assert_eq!(NoticeError::UnknownPoster.kind().status_code(), 401);
        assert_eq!(NoticeError::Internal("x".into()).kind().status_code(), 500);
    }

    #[test]
    fn test_not_found_message() {
        let app = NoticeError::NotFound.into_app_error();
        assert_eq!(app.message(), "Notice not found");
    }

    #[test]
    fn test_database_detail_is_hidden() {
        let app = NoticeError::Database(sqlx::Error::PoolTimedOut).into_app_error();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Internal server error");
    }

    #[test]
    fn test_from_app_error() {
        let err: NoticeError = AppError::bad_request("Title is required").into();
        assert!(matches!(err, NoticeError::Validation(ref m) if m == "Title is required"));

        let err: NoticeError = AppError::internal("boom").into();
        assert!(matches!(err, NoticeError::Internal(_)));
    }
}
