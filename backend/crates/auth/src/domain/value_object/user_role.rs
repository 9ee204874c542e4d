use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse permission tier. Only admins may write notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Parse a stored or submitted role code
    ///
    /// Exact match only: `"Admin"` is not a role.
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            _ => Err(AppError::bad_request(format!("Unknown role: {code}"))),
        }
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        UserRole::from_code(s)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("user").unwrap(), UserRole::User);
        assert_eq!(UserRole::from_code("admin").unwrap(), UserRole::Admin);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(UserRole::from_code("Admin").is_err());
        assert!(UserRole::from_code("super_admin").is_err());
        assert!(UserRole::from_code("").is_err());
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::User.to_string(), "user");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_default_and_checks() {
        assert_eq!(UserRole::default(), UserRole::User);
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert!(serde_json::from_str::<UserRole>("\"root\"").is_err());
    }
}
