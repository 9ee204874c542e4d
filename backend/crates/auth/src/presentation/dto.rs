//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::AuthOutput;
use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Accepted for client compatibility; only `"user"` is allowed
    #[serde(default)]
    pub role: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Public view of a user (never includes the password hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: *user.user_id.as_uuid(),
            email: user.email.as_str().to_string(),
            role: user.user_role,
            created_at: user.created_at,
        }
    }
}

/// Register/login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<AuthOutput> for AuthResponse {
    fn from(output: AuthOutput) -> Self {
        Self {
            user: UserResponse::from(&output.user),
            token: output.token.token,
            expires_at: output.token.expires_at,
        }
    }
}
