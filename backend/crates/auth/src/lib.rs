//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless bearer tokens (HS256 JWT, 1 day by default)
//! - Two roles: `user` and `admin`
//! - Idempotent seed-account bootstrap
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Unknown email and wrong password are indistinguishable
//! - Every token failure is the same 401 to the caller

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, SeedAccount};
pub use application::token::{AuthenticatedUser, TokenService};
pub use application::bootstrap::BootstrapUseCase;
pub use domain::value_object::user_role::UserRole;
pub use error::{AuthError, AuthResult, TokenError};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::UserRepository;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
