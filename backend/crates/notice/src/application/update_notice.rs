//! Update Notice Use Case
//!
//! Partial update. Concurrent edits are last-write-wins.

use std::sync::Arc;

use chrono::Utc;

use crate::application::parse_notice_id;
use crate::domain::entity::notice::{NoticeChanges, NoticeWithPoster};
use crate::domain::repository::NoticeRepository;
use crate::domain::value_object::{
    notice_category::NoticeCategory,
    notice_text::{NoticeContent, NoticeTitle},
};
use crate::error::{NoticeError, NoticeResult};

/// Update input; absent fields are left unchanged
#[derive(Debug, Default)]
pub struct UpdateNoticeInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

/// Update notice use case
pub struct UpdateNoticeUseCase<R>
where
    R: NoticeRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateNoticeUseCase<R>
where
    R: NoticeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        notice_id: &str,
        input: UpdateNoticeInput,
    ) -> NoticeResult<NoticeWithPoster> {
        let notice_id = parse_notice_id(notice_id)?;

        let changes = NoticeChanges {
            title: input.title.map(NoticeTitle::new).transpose()?,
            content: input.content.map(NoticeContent::new).transpose()?,
            category: input
                .category
                .as_deref()
                .map(NoticeCategory::from_code)
                .transpose()?,
            updated_at: Utc::now(),
        };

        if changes.is_empty() {
            return Err(NoticeError::Validation(
                "At least one of title, content or category is required".to_string(),
            ));
        }

        let updated = self
            .repo
            .update(&notice_id, &changes)
            .await?
            .ok_or(NoticeError::NotFound)?;

        tracing::info!(notice_id = %notice_id, "Notice updated");

        Ok(updated)
    }
}
