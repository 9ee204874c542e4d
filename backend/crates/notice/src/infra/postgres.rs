//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{NoticeId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::notice::{Notice, NoticeChanges, NoticeWithPoster, Poster};
use crate::domain::repository::NoticeRepository;
use crate::domain::value_object::{
    notice_category::NoticeCategory,
    notice_filter::NoticeFilter,
    notice_text::{NoticeContent, NoticeTitle},
};
use crate::error::{NoticeError, NoticeResult};

/// PostgreSQL-backed notice store
#[derive(Clone)]
pub struct PgNoticeRepository {
    pool: PgPool,
}

impl PgNoticeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl NoticeRepository for PgNoticeRepository {
    async fn create(&self, notice: &Notice) -> NoticeResult<NoticeWithPoster> {
        let row = sqlx::query_as::<_, NoticeRow>(
            r#"
            WITH inserted AS (
                INSERT INTO notices (
                    notice_id,
                    title,
                    content,
                    category,
                    posted_by,
                    created_at,
                    updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
            )
            SELECT
                n.notice_id,
                n.title,
                n.content,
                n.category,
                n.posted_by,
                u.email AS poster_email,
                n.created_at,
                n.updated_at
            FROM inserted n
            JOIN users u ON u.user_id = n.posted_by
            "#,
        )
        .bind(notice.notice_id.as_uuid())
        .bind(notice.title.as_str())
        .bind(notice.content.as_str())
        .bind(notice.category.code())
        .bind(notice.posted_by.as_uuid())
        .bind(notice.created_at)
        .bind(notice.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                NoticeError::UnknownPoster
            }
            _ => NoticeError::Database(e),
        })?;

        row.into_notice()
    }

    async fn list(&self, filter: &NoticeFilter) -> NoticeResult<Vec<NoticeWithPoster>> {
        let rows = sqlx::query_as::<_, NoticeRow>(
            r#"
            SELECT
                n.notice_id,
                n.title,
                n.content,
                n.category,
                n.posted_by,
                u.email AS poster_email,
                n.created_at,
                n.updated_at
            FROM notices n
            JOIN users u ON u.user_id = n.posted_by
            WHERE ($1::text IS NULL OR n.category = $1)
              AND (
                $2::text IS NULL
                OR strpos(lower(n.title), lower($2)) > 0
                OR strpos(lower(n.content), lower($2)) > 0
              )
            ORDER BY n.created_at DESC, n.notice_seq DESC
            "#,
        )
        .bind(filter.category.map(|c| c.code()))
        .bind(filter.query.as_deref())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_notice()).collect()
    }

    async fn update(
        &self,
        notice_id: &NoticeId,
        changes: &NoticeChanges,
    ) -> NoticeResult<Option<NoticeWithPoster>> {
        // Single statement: concurrent edits are last-write-wins
        let row = sqlx::query_as::<_, NoticeRow>(
            r#"
            WITH updated AS (
                UPDATE notices SET
                    title = COALESCE($2, title),
                    content = COALESCE($3, content),
                    category = COALESCE($4, category),
                    updated_at = $5
                WHERE notice_id = $1
                RETURNING *
            )
            SELECT
                n.notice_id,
                n.title,
                n.content,
                n.category,
                n.posted_by,
                u.email AS poster_email,
                n.created_at,
                n.updated_at
            FROM updated n
            JOIN users u ON u.user_id = n.posted_by
            "#,
        )
        .bind(notice_id.as_uuid())
        .bind(changes.title.as_ref().map(|t| t.as_str()))
        .bind(changes.content.as_ref().map(|c| c.as_str()))
        .bind(changes.category.map(|c| c.code()))
        .bind(changes.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_notice()).transpose()
    }

    async fn delete(&self, notice_id: &NoticeId) -> NoticeResult<bool> {
        let deleted = sqlx::query("DELETE FROM notices WHERE notice_id = $1")
            .bind(notice_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct NoticeRow {
    notice_id: Uuid,
    title: String,
    content: String,
    category: String,
    posted_by: Uuid,
    poster_email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoticeRow {
    fn into_notice(self) -> NoticeResult<NoticeWithPoster> {
        let category = NoticeCategory::from_code(&self.category)
            .map_err(|e| NoticeError::Internal(format!("Invalid category: {}", e)))?;

        let posted_by = UserId::from_uuid(self.posted_by);

        Ok(NoticeWithPoster {
            notice: Notice {
                notice_id: NoticeId::from_uuid(self.notice_id),
                title: NoticeTitle::from_db(self.title),
                content: NoticeContent::from_db(self.content),
                category,
                posted_by,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            poster: Poster {
                user_id: posted_by,
                email: self.poster_email,
            },
        })
    }
}
