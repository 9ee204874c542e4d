//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryNoticeRepository;
pub use postgres::PgNoticeRepository;
