//! List Notices Use Case

use std::sync::Arc;

use crate::domain::entity::notice::NoticeWithPoster;
use crate::domain::repository::NoticeRepository;
use crate::domain::value_object::notice_filter::NoticeFilter;
use crate::error::NoticeResult;

/// List input (raw query parameters)
#[derive(Debug, Default)]
pub struct ListNoticesInput {
    pub category: Option<String>,
    pub query: Option<String>,
}

/// List notices use case
pub struct ListNoticesUseCase<R>
where
    R: NoticeRepository,
{
    repo: Arc<R>,
}

impl<R> ListNoticesUseCase<R>
where
    R: NoticeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ListNoticesInput) -> NoticeResult<Vec<NoticeWithPoster>> {
        let filter = NoticeFilter::parse(input.category.as_deref(), input.query.as_deref())?;
        self.repo.list(&filter).await
    }
}
