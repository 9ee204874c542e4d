//! Application Layer
//!
//! Use cases.

pub mod create_notice;
pub mod delete_notice;
pub mod list_notices;
pub mod update_notice;

// Re-exports
pub use create_notice::{CreateNoticeInput, CreateNoticeUseCase};
pub use delete_notice::DeleteNoticeUseCase;
pub use list_notices::{ListNoticesInput, ListNoticesUseCase};
pub use update_notice::{UpdateNoticeInput, UpdateNoticeUseCase};

use kernel::id::NoticeId;

use crate::error::{NoticeError, NoticeResult};

/// Path ids that are not UUIDs cannot name a notice
pub(crate) fn parse_notice_id(raw: &str) -> NoticeResult<NoticeId> {
    raw.parse().map_err(|_| NoticeError::NotFound)
}
