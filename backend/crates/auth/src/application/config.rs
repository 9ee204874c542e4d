//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::crypto::random_bytes;

use crate::domain::value_object::user_role::UserRole;

/// Account ensured at startup
#[derive(Clone)]
pub struct SeedAccount {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl SeedAccount {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

impl fmt::Debug for SeedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedAccount")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for bearer tokens (at least 32 bytes)
    pub token_secret: Vec<u8>,
    /// Bearer token lifetime
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Accounts ensured by the startup bootstrap
    pub seed_accounts: Vec<SeedAccount>,
}

impl Default for AuthConfig {
    /// No secret: `TokenService` refuses to start until one is provided.
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(24 * 3600), // 1 day
            password_pepper: None,
            seed_accounts: Self::default_seed_accounts(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: random_bytes(32),
            ..Default::default()
        }
    }

    /// The well-known admin and user accounts
    pub fn default_seed_accounts() -> Vec<SeedAccount> {
        vec![
            SeedAccount::new("admin@example.com", "admin123", UserRole::Admin),
            SeedAccount::new("user@example.com", "user123", UserRole::User),
        ]
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("seed_accounts", &self.seed_accounts)
            .finish()
    }
}
