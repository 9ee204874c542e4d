//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store
///
/// Email uniqueness belongs to the storage layer: `create` must fail with
/// `AuthError::DuplicateEmail` atomically, even when two registrations
/// race past any prior lookup.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user (password already hashed)
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}
