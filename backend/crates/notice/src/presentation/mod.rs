//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::NoticeAppState;
pub use router::{notice_router, notice_router_generic};
