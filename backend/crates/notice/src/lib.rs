//! Notice Board Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - Anyone may list notices
//! - Only admins may create, update or delete them
//! - The poster is always the authenticated caller, never the request body

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{NoticeError, NoticeResult};
pub use infra::memory::InMemoryNoticeRepository;
pub use infra::postgres::PgNoticeRepository;
pub use presentation::router::{notice_router, notice_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
