//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::NoticeId;

use crate::domain::entity::notice::{Notice, NoticeChanges, NoticeWithPoster};
use crate::domain::value_object::notice_filter::NoticeFilter;
use crate::error::NoticeResult;

/// Notice store
#[trait_variant::make(NoticeRepository: Send)]
pub trait LocalNoticeRepository {
    /// Persist a new notice
    ///
    /// Fails with `NoticeError::UnknownPoster` if `posted_by` is not a
    /// stored user.
    async fn create(&self, notice: &Notice) -> NoticeResult<NoticeWithPoster>;

    /// Matching notices, newest first (ties: most recently inserted first)
    async fn list(&self, filter: &NoticeFilter) -> NoticeResult<Vec<NoticeWithPoster>>;

    /// Apply a partial update; `None` if the notice does not exist
    async fn update(
        &self,
        notice_id: &NoticeId,
        changes: &NoticeChanges,
    ) -> NoticeResult<Option<NoticeWithPoster>>;

    /// Delete a notice; `false` if it did not exist
    async fn delete(&self, notice_id: &NoticeId) -> NoticeResult<bool>;
}
