//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::notice::{NoticeWithPoster, Poster};
use crate::domain::value_object::notice_category::NoticeCategory;

// ============================================================================
// Requests
// ============================================================================

/// List query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListNoticesQuery {
    /// Category code or `all`
    pub category: Option<String>,
    /// Search text
    pub q: Option<String>,
}

/// Create notice request
///
/// `category` stays a string so an unknown value gets the same message as
/// every other validation failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateNoticeRequest {
    pub title: String,
    pub content: String,
    pub category: String,
}

/// Update notice request (all fields optional)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateNoticeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Poster as shown on a notice
#[derive(Debug, Clone, Serialize)]
pub struct PosterResponse {
    pub id: Uuid,
    pub email: String,
}

impl From<Poster> for PosterResponse {
    fn from(poster: Poster) -> Self {
        Self {
            id: poster.user_id.into_uuid(),
            email: poster.email,
        }
    }
}

/// Notice response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: NoticeCategory,
    pub posted_by: PosterResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoticeWithPoster> for NoticeResponse {
    fn from(value: NoticeWithPoster) -> Self {
        let NoticeWithPoster { notice, poster } = value;
        Self {
            id: notice.notice_id.into_uuid(),
            title: notice.title.as_str().to_string(),
            content: notice.content.as_str().to_string(),
            category: notice.category,
            posted_by: poster.into(),
            created_at: notice.created_at,
            updated_at: notice.updated_at,
        }
    }
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
