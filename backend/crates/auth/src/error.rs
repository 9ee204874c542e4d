//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Every token or header problem collapses into one 401 on the wire; the
//! precise reason only goes to the log.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Reasons a bearer token fails verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a token at all, or claims that do not parse
    #[error("Token is malformed")]
    Invalid,

    /// Valid signature, but past `exp`
    #[error("Token has expired")]
    Expired,

    /// Signed with a different secret, or tampered with
    #[error("Token signature mismatch")]
    SignatureMismatch,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password/role failed shape validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Email already registered
    #[error("Email is already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password (never distinguished)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No usable `Authorization` header
    #[error("Missing bearer token: {0}")]
    MissingToken(#[from] BearerError),

    /// Token failed verification
    #[error("Token rejected: {0}")]
    Token(#[from] TokenError),

    /// Token refers to a user the store does not know
    #[error("Token subject no longer exists")]
    UnknownSubject,

    /// Authenticated, but the role is insufficient
    #[error("Admin role required")]
    Forbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidInput(_) | AuthError::DuplicateEmail => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::MissingToken(_)
            | AuthError::Token(_)
            | AuthError::UnknownSubject => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError with a message that is safe to show the caller
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::InvalidInput(msg) => AppError::bad_request(msg),
            AuthError::DuplicateEmail => AppError::bad_request("Email is already registered")
                .with_action("Sign in instead, or register with a different email"),
            AuthError::InvalidCredentials => AppError::unauthorized("Invalid email or password"),
            AuthError::MissingToken(_) | AuthError::Token(_) | AuthError::UnknownSubject => {
                AppError::unauthorized("Authentication required")
                    .with_action("Please sign in again")
            }
            AuthError::Forbidden => AppError::forbidden("Admin role required"),
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Token(reason) => {
                tracing::warn!(reason = %reason, "Bearer token rejected");
            }
            AuthError::UnknownSubject => {
                tracing::warn!("Bearer token for unknown user");
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
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidInput(rejection.body_text())
    }
}

/// Value objects report validation failures as 400 `AppError`s
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::InvalidInput(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_look_identical() {
        let reasons = [
            AuthError::Token(TokenError::Invalid),
            AuthError::Token(TokenError::Expired),
            AuthError::Token(TokenError::SignatureMismatch),
            AuthError::MissingToken(BearerError::Missing),
            AuthError::MissingToken(BearerError::Malformed),
        ];

        for err in reasons {
            let app = err.into_app_error();
            assert_eq!(app.status_code(), 401);
            assert_eq!(app.message(), "Authentication required");
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::DuplicateEmail.kind().status_code(), 400);
        assert_eq!(AuthError::InvalidInput("x".into()).kind().status_code(), 400);
        assert_eq!(AuthError::InvalidCredentials.kind().status_code(), 401);
        assert_eq!(AuthError::Forbidden.kind().status_code(), 403);
        assert_eq!(AuthError::Internal("x".into()).kind().status_code(), 500);
    }

    #[test]
    fn test_from_app_error() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::InvalidInput(ref m) if m == "Invalid email format"));

        let err: AuthError = AppError::internal("hash failed").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let app = AuthError::Internal("argon2 blew up on host db-1".into()).into_app_error();
        assert_eq!(app.message(), "Internal server error");

        let app = AuthError::Database(sqlx::Error::PoolTimedOut).into_app_error();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Internal server error");
    }
}
