//! Register Use Case
//!
//! Creates a user account and signs the caller in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, TokenService};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Result of a successful register or login
#[derive(Debug)]
pub struct AuthOutput {
    pub user: User,
    pub token: IssuedToken,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        let user = self.create_user(input).await?;
        let token = self.tokens.issue(&user.user_id, user.user_role)?;

        tracing::info!(
            user_id = %user.user_id,
            role = %user.user_role,
            "User registered"
        );

        Ok(AuthOutput { user, token })
    }

    /// Validate, hash and store a new account without issuing a token
    ///
    /// The store decides uniqueness; a taken email surfaces as
    /// `AuthError::DuplicateEmail` from `create`.
    pub async fn create_user(&self, input: RegisterInput) -> AuthResult<User> {
        let email = Email::new(input.email)?;
        let raw = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw, self.config.pepper())?;

        let user = User::new(email, password_hash, input.role);
        self.user_repo.create(&user).await?;

        Ok(user)
    }
}
