//! Delete Notice Use Case

use std::sync::Arc;

use crate::application::parse_notice_id;
use crate::domain::repository::NoticeRepository;
use crate::error::{NoticeError, NoticeResult};

/// Delete notice use case
pub struct DeleteNoticeUseCase<R>
where
    R: NoticeRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteNoticeUseCase<R>
where
    R: NoticeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, notice_id: &str) -> NoticeResult<()> {
        let notice_id = parse_notice_id(notice_id)?;

        if !self.repo.delete(&notice_id).await? {
            return Err(NoticeError::NotFound);
        }

        tracing::info!(notice_id = %notice_id, "Notice deleted");

        Ok(())
    }
}
