//! In-Memory Repository Implementation
//!
//! Same contract as the PostgreSQL store, including atomic email
//! uniqueness. Backs the router tests.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Store {
    users: HashMap<UserId, User>,
    by_email: HashMap<Email, UserId>,
}

/// In-memory credential store
///
/// Cloning shares the underlying store.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        // Check and insert under one write lock
        let mut store = self.store.write().await;

        if store.by_email.contains_key(&user.email) {
            return Err(AuthError::DuplicateEmail);
        }

        store.by_email.insert(user.email.clone(), user.user_id);
        store.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.store.read().await.users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store
            .by_email
            .get(email)
            .and_then(|id| store.users.get(id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        user_password::{RawPassword, UserPassword},
        user_role::UserRole,
    };

    fn user(email: &str) -> User {
        let raw = RawPassword::new("pw123".to_string()).unwrap();
        User::new(
            Email::new(email).unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
            UserRole::User,
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let alice = user("alice@example.com");
        repo.create(&alice).await.unwrap();

        let by_id = repo.find_by_id(&alice.user_id).await.unwrap().unwrap();
        assert_eq!(by_id.email, alice.email);

        let by_email = repo.find_by_email(&alice.email).await.unwrap().unwrap();
        assert_eq!(by_email.user_id, alice.user_id);

        assert!(repo.find_by_id(&UserId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("dup@example.com")).await.unwrap();

        let err = repo.create(&user("dup@example.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("Case@example.com")).await.unwrap();

        let other = Email::new("case@example.com").unwrap();
        assert!(repo.find_by_email(&other).await.unwrap().is_none());
    }
}
