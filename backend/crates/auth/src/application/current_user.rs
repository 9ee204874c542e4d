//! Current User Use Case
//!
//! Resolves a verified token identity to the stored account.

use std::sync::Arc;

use crate::application::token::AuthenticatedUser;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Current user use case
pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, identity: &AuthenticatedUser) -> AuthResult<User> {
        self.user_repo
            .find_by_id(&identity.user_id)
            .await?
            .ok_or(AuthError::UnknownSubject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email,
        user_password::{RawPassword, UserPassword},
        user_role::UserRole,
    };
    use crate::infra::memory::InMemoryUserRepository;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_resolves_known_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let raw = RawPassword::new("admin123".to_string()).unwrap();
        let admin = User::new(
            Email::new("admin@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
            UserRole::Admin,
        );
        repo.create(&admin).await.unwrap();

        let user = CurrentUserUseCase::new(repo)
            .execute(&AuthenticatedUser {
                user_id: admin.user_id,
                role: UserRole::Admin,
            })
            .await
            .unwrap();
        assert_eq!(user.user_id, admin.user_id);
    }

    #[tokio::test]
    async fn test_unknown_subject() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let err = CurrentUserUseCase::new(repo)
            .execute(&AuthenticatedUser {
                user_id: UserId::new(),
                role: UserRole::User,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UnknownSubject));
    }
}
