//! In-Memory Repository Implementation
//!
//! Resolves posters through any `UserRepository`, so the foreign-key
//! behaviour matches the PostgreSQL store.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use kernel::id::NoticeId;
use tokio::sync::RwLock;

use crate::domain::entity::notice::{Notice, NoticeChanges, NoticeWithPoster, Poster};
use crate::domain::repository::NoticeRepository;
use crate::domain::value_object::notice_filter::NoticeFilter;
use crate::error::{NoticeError, NoticeResult};

/// In-memory notice store
///
/// Cloning shares the underlying store.
#[derive(Clone)]
pub struct InMemoryNoticeRepository<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    // Insertion order
    notices: Arc<RwLock<Vec<Notice>>>,
    users: U,
}

impl<U> InMemoryNoticeRepository<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(users: U) -> Self {
        Self {
            notices: Arc::new(RwLock::new(Vec::new())),
            users,
        }
    }

    async fn poster_of(&self, notice: &Notice) -> NoticeResult<Poster> {
        let user = self
            .users
            .find_by_id(&notice.posted_by)
            .await?
            .ok_or(NoticeError::UnknownPoster)?;

        Ok(Poster {
            user_id: user.user_id,
            email: user.email.as_str().to_string(),
        })
    }

    async fn with_poster(&self, notice: Notice) -> NoticeResult<NoticeWithPoster> {
        let poster = self.poster_of(&notice).await?;
        Ok(NoticeWithPoster { notice, poster })
    }
}

impl<U> NoticeRepository for InMemoryNoticeRepository<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    async fn create(&self, notice: &Notice) -> NoticeResult<NoticeWithPoster> {
        let poster = self.poster_of(notice).await?;

        self.notices.write().await.push(notice.clone());

        Ok(NoticeWithPoster {
            notice: notice.clone(),
            poster,
        })
    }

    async fn list(&self, filter: &NoticeFilter) -> NoticeResult<Vec<NoticeWithPoster>> {
        let mut matching: Vec<Notice> = self
            .notices
            .read()
            .await
            .iter()
            .rev()
            .filter(|n| filter.matches(n.category, n.title.as_str(), n.content.as_str()))
            .cloned()
            .collect();

        // Stable: equal timestamps keep newest-inserted first
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut result = Vec::with_capacity(matching.len());
        for notice in matching {
            result.push(self.with_poster(notice).await?);
        }
        Ok(result)
    }

    async fn update(
        &self,
        notice_id: &NoticeId,
        changes: &NoticeChanges,
    ) -> NoticeResult<Option<NoticeWithPoster>> {
        let updated = {
            let mut notices = self.notices.write().await;
            match notices.iter_mut().find(|n| n.notice_id == *notice_id) {
                Some(notice) => {
                    notice.apply(changes);
                    notice.clone()
                }
                None => return Ok(None),
            }
        };

        self.with_poster(updated).await.map(Some)
    }

    async fn delete(&self, notice_id: &NoticeId) -> NoticeResult<bool> {
        let mut notices = self.notices.write().await;
        let before = notices.len();
        notices.retain(|n| n.notice_id != *notice_id);
        Ok(notices.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        notice_category::NoticeCategory,
        notice_text::{NoticeContent, NoticeTitle},
    };
    use auth::InMemoryUserRepository;
    use auth::domain::entity::user::User;
    use auth::domain::value_object::{
        email::Email,
        user_password::{RawPassword, UserPassword},
        user_role::UserRole,
    };
    use kernel::id::UserId;

    async fn admin(users: &InMemoryUserRepository) -> User {
        let raw = RawPassword::new("admin123".to_string()).unwrap();
        let user = User::new(
            Email::new("admin@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
            UserRole::Admin,
        );
        users.create(&user).await.unwrap();
        user
    }

    fn notice(title: &str, category: NoticeCategory, posted_by: UserId) -> Notice {
        Notice::new(
            NoticeTitle::new(title).unwrap(),
            NoticeContent::new(format!("{title} body")).unwrap(),
            category,
            posted_by,
        )
    }

    #[tokio::test]
    async fn test_create_resolves_poster() {
        let users = InMemoryUserRepository::new();
        let admin = admin(&users).await;
        let repo = InMemoryNoticeRepository::new(users);

        let created = repo
            .create(&notice("Exam", NoticeCategory::Academics, admin.user_id))
            .await
            .unwrap();
        assert_eq!(created.poster.user_id, admin.user_id);
        assert_eq!(created.poster.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_unknown_poster_rejected() {
        let repo = InMemoryNoticeRepository::new(InMemoryUserRepository::new());
        let err = repo
            .create(&notice("Exam", NoticeCategory::Academics, UserId::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, NoticeError::UnknownPoster));
        assert!(repo.list(&NoticeFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_newest_first_with_tie_break() {
        let users = InMemoryUserRepository::new();
        let admin = admin(&users).await;
        let repo = InMemoryNoticeRepository::new(users);

        let first = notice("First", NoticeCategory::Regular, admin.user_id);
        let mut second = notice("Second", NoticeCategory::Regular, admin.user_id);
        second.created_at = first.created_at;
        let mut oldest = notice("Oldest", NoticeCategory::Others, admin.user_id);
        oldest.created_at = first.created_at - chrono::Duration::hours(1);

        repo.create(&first).await.unwrap();
        repo.create(&oldest).await.unwrap();
        repo.create(&second).await.unwrap();

        let titles: Vec<String> = repo
            .list(&NoticeFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.notice.title.as_str().to_string())
            .collect();
        assert_eq!(titles, ["Second", "First", "Oldest"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let repo = InMemoryNoticeRepository::new(InMemoryUserRepository::new());
        let changes = NoticeChanges {
            title: Some(NoticeTitle::new("New").unwrap()),
            content: None,
            category: None,
            updated_at: chrono::Utc::now(),
        };

        assert!(repo.update(&NoticeId::new(), &changes).await.unwrap().is_none());
        assert!(!repo.delete(&NoticeId::new()).await.unwrap());
    }
}
