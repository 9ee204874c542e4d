//! Token Service
//!
//! Issues and verifies the bearer tokens handed out at login/register.
//!
//! Tokens are HS256 JWTs carrying the user's id (`sub`), role, issue time
//! and expiry. Verification is stateless: nothing is stored server-side,
//! so a token stays valid until `exp` even if the secret holder restarts,
//! as long as the secret is the same.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult, TokenError};

/// Minimum HS256 secret length in bytes
pub const MIN_SECRET_LENGTH: usize = 32;

/// Verified identity attached to an authenticated request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    role: UserRole,
    iat: i64,
    exp: i64,
}

/// Bearer token issuer and verifier
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
}

impl TokenService {
    /// Create a token service
    ///
    /// ## Errors
    /// `AuthError::Internal` if the secret is shorter than
    /// [`MIN_SECRET_LENGTH`] or the TTL is zero or out of range.
    pub fn new(secret: &[u8], ttl: Duration) -> AuthResult<Self> {
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AuthError::Internal(format!(
                "token secret must be at least {} bytes (got {})",
                MIN_SECRET_LENGTH,
                secret.len()
            )));
        }

        let ttl = chrono::Duration::from_std(ttl)
            .ok()
            .filter(|ttl| *ttl > chrono::Duration::zero())
            .ok_or_else(|| AuthError::Internal("token TTL must be positive".to_string()))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    /// Create from the auth configuration
    pub fn from_config(config: &AuthConfig) -> AuthResult<Self> {
        Self::new(&config.token_secret, config.token_ttl)
    }

    /// Issue a token valid from now
    pub fn issue(&self, user_id: &UserId, role: UserRole) -> AuthResult<IssuedToken> {
        self.issue_at(user_id, role, Utc::now())
    }

    /// Issue a token as if signed at `issued_at`
    pub fn issue_at(
        &self,
        user_id: &UserId,
        role: UserRole,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<IssuedToken> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: *user_id.as_uuid(),
            role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {}", e)))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature and expiry, returning the embedded identity
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                JwtErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                _ => TokenError::Invalid,
            }
        })?;

        Ok(AuthenticatedUser {
            user_id: UserId::from_uuid(data.claims.sub),
            role: data.claims.role,
        })
    }

    /// Token lifetime
    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("keys", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
