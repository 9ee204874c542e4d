//! User Entity
//!
//! An account on the notice board together with its credential.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, user_password::UserPassword, user_role::UserRole,
};

/// User entity
///
/// Carries the password hash so the store can persist the credential in
/// one write. `UserPassword` redacts itself in `Debug`; presentation DTOs
/// never copy it.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login identifier (unique, exact match)
    pub email: Email,
    /// Argon2id hash of the password
    pub password_hash: UserPassword,
    /// Role, fixed at creation
    pub user_role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, password_hash: UserPassword, user_role: UserRole) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            user_role,
            created_at: Utc::now(),
        }
    }
}
