//! Login Use Case
//!
//! Verifies an email/password pair and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::register::AuthOutput;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    /// Every failure is `InvalidCredentials`, whatever the cause
    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        let pepper = self.config.pepper();

        let raw = RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = match Email::new(input.email) {
            Ok(email) => self.user_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            raw.verify_decoy(pepper);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw, pepper) {
            tracing::warn!(user_id = %user.user_id, "Wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.user_id, user.user_role)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutput { user, token })
    }
}
