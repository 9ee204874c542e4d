//! Create Notice Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::notice::{Notice, NoticeWithPoster};
use crate::domain::repository::NoticeRepository;
use crate::domain::value_object::{
    notice_category::NoticeCategory,
    notice_text::{NoticeContent, NoticeTitle},
};
use crate::error::NoticeResult;

/// Create input
pub struct CreateNoticeInput {
    pub title: String,
    pub content: String,
    pub category: String,
    /// From the verified token, never from the request body
    pub posted_by: UserId,
}

/// Create notice use case
pub struct CreateNoticeUseCase<R>
where
    R: NoticeRepository,
{
    repo: Arc<R>,
}

impl<R> CreateNoticeUseCase<R>
where
    R: NoticeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateNoticeInput) -> NoticeResult<NoticeWithPoster> {
        let notice = Notice::new(
            NoticeTitle::new(input.title)?,
            NoticeContent::new(input.content)?,
            NoticeCategory::from_code(&input.category)?,
            input.posted_by,
        );

        let created = self.repo.create(&notice).await?;

        tracing::info!(
            notice_id = %created.notice.notice_id,
            posted_by = %created.poster.user_id,
            category = %created.notice.category,
            "Notice created"
        );

        Ok(created)
    }
}
