//! Notice Entity

use chrono::{DateTime, Utc};
use kernel::id::{NoticeId, UserId};

use crate::domain::value_object::{
    notice_category::NoticeCategory,
    notice_text::{NoticeContent, NoticeTitle},
};

/// Notice entity
#[derive(Debug, Clone)]
pub struct Notice {
    pub notice_id: NoticeId,
    pub title: NoticeTitle,
    pub content: NoticeContent,
    pub category: NoticeCategory,
    /// Creating admin, taken from the verified token
    pub posted_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notice {
    /// Create a new notice
    pub fn new(
        title: NoticeTitle,
        content: NoticeContent,
        category: NoticeCategory,
        posted_by: UserId,
    ) -> Self {
        let now = Utc::now();
        Self {
            notice_id: NoticeId::new(),
            title,
            content,
            category,
            posted_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update
    pub fn apply(&mut self, changes: &NoticeChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(content) = &changes.content {
            self.content = content.clone();
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        self.updated_at = changes.updated_at;
    }
}

/// Validated partial update
#[derive(Debug, Clone)]
pub struct NoticeChanges {
    pub title: Option<NoticeTitle>,
    pub content: Option<NoticeContent>,
    pub category: Option<NoticeCategory>,
    pub updated_at: DateTime<Utc>,
}

impl NoticeChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.category.is_none()
    }
}

/// Public identity of a notice's poster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poster {
    pub user_id: UserId,
    pub email: String,
}

/// Notice joined with its poster, as returned to readers
#[derive(Debug, Clone)]
pub struct NoticeWithPoster {
    pub notice: Notice,
    pub poster: Poster,
}
