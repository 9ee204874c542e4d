//! Seed Account Bootstrap
//!
//! Ensures the configured seed accounts exist. Called once by the binary
//! at startup; safe to run again or from several processes at once.

use std::sync::Arc;

use crate::application::config::{AuthConfig, SeedAccount};
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Bootstrap summary
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BootstrapOutput {
    /// Accounts created by this run
    pub created: usize,
    /// Accounts that were already present
    pub existing: usize,
}

/// Seed account bootstrap use case
pub struct BootstrapUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    register: RegisterUseCase<U>,
    config: Arc<AuthConfig>,
}

impl<U> BootstrapUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            register: RegisterUseCase::new(user_repo.clone(), tokens, config.clone()),
            user_repo,
            config,
        }
    }

    pub async fn execute(&self) -> AuthResult<BootstrapOutput> {
        let mut output = BootstrapOutput::default();

        for seed in &self.config.seed_accounts {
            if self.ensure(seed).await? {
                output.created += 1;
            } else {
                output.existing += 1;
            }
        }

        tracing::info!(
            created = output.created,
            existing = output.existing,
            "Seed accounts ensured"
        );

        Ok(output)
    }

    /// Returns whether the account was created by this call
    async fn ensure(&self, seed: &SeedAccount) -> AuthResult<bool> {
        let email = Email::new(seed.email.as_str())?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            tracing::debug!(email = %email.as_str(), "Seed account already present");
            return Ok(false);
        }

        let input = RegisterInput {
            email: seed.email.clone(),
            password: seed.password.clone(),
            role: seed.role,
        };

        match self.register.create_user(input).await {
            Ok(user) => {
                tracing::info!(
                    user_id = %user.user_id,
                    role = %user.user_role,
                    "Seed account created"
                );
                Ok(true)
            }
            // Another process got there first
            Err(AuthError::DuplicateEmail) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;
    use crate::infra::memory::InMemoryUserRepository;

    fn bootstrap(
        repo: &Arc<InMemoryUserRepository>,
        config: AuthConfig,
    ) -> BootstrapUseCase<InMemoryUserRepository> {
        let config = Arc::new(config);
        let tokens = Arc::new(TokenService::from_config(&config).unwrap());
        BootstrapUseCase::new(repo.clone(), tokens, config)
    }

    #[tokio::test]
    async fn test_creates_default_seeds() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let output = bootstrap(&repo, AuthConfig::with_random_secret())
            .execute()
            .await
            .unwrap();

        assert_eq!(output, BootstrapOutput { created: 2, existing: 0 });

        let admin = repo
            .find_by_email(&Email::new("admin@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.user_role, UserRole::Admin);

        let user = repo
            .find_by_email(&Email::new("user@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.user_role, UserRole::User);
    }

    #[tokio::test]
    async fn test_is_idempotent() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = bootstrap(&repo, AuthConfig::with_random_secret());

        use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(second, BootstrapOutput { created: 0, existing: 2 });
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_concurrent_bootstraps_create_once() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let first = bootstrap(&repo, AuthConfig::with_random_secret());
        let second = bootstrap(&repo, AuthConfig::with_random_secret());

        let (a, b) = tokio::join!(first.execute(), second.execute());
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_eq!(a.created + b.created, 2);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_invalid_seed_fails() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = AuthConfig {
            seed_accounts: vec![SeedAccount::new("broken", "pw", UserRole::Admin)],
            ..AuthConfig::with_random_secret()
        };

        let err = bootstrap(&repo, config).execute().await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(_)));
    }
}
