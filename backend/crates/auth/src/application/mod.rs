//! Application Layer
//!
//! Use cases and application services.

pub mod bootstrap;
pub mod config;
pub mod current_user;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use bootstrap::{BootstrapOutput, BootstrapUseCase};
pub use config::{AuthConfig, SeedAccount};
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use register::{AuthOutput, RegisterInput, RegisterUseCase};
pub use token::{AuthenticatedUser, IssuedToken, TokenService};
