//! HTTP Handlers

use auth::AuthenticatedUser;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{
    CreateNoticeInput, CreateNoticeUseCase, DeleteNoticeUseCase, ListNoticesInput,
    ListNoticesUseCase, UpdateNoticeInput, UpdateNoticeUseCase,
};
use crate::domain::repository::NoticeRepository;
use crate::error::NoticeResult;
use crate::presentation::dto::{
    CreateNoticeRequest, ListNoticesQuery, MessageResponse, NoticeResponse, UpdateNoticeRequest,
};

/// Shared state for notice handlers
#[derive(Clone)]
pub struct NoticeAppState<R>
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// List
// ============================================================================

/// GET /api/notices
pub async fn list_notices<R>(
    State(state): State<NoticeAppState<R>>,
    query: Result<Query<ListNoticesQuery>, QueryRejection>,
) -> NoticeResult<Json<Vec<NoticeResponse>>>
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;

    let use_case = ListNoticesUseCase::new(state.repo.clone());
    let notices = use_case
        .execute(ListNoticesInput {
            category: query.category,
            query: query.q,
        })
        .await?;

    Ok(Json(notices.into_iter().map(NoticeResponse::from).collect()))
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/notices (admin)
pub async fn create_notice<R>(
    State(state): State<NoticeAppState<R>>,
    Extension(identity): Extension<AuthenticatedUser>,
    payload: Result<Json<CreateNoticeRequest>, JsonRejection>,
) -> NoticeResult<(StatusCode, Json<NoticeResponse>)>
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = CreateNoticeUseCase::new(state.repo.clone());
    let created = use_case
        .execute(CreateNoticeInput {
            title: req.title,
            content: req.content,
            category: req.category,
            posted_by: identity.user_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(NoticeResponse::from(created))))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /api/notices/{id} (admin)
pub async fn update_notice<R>(
    State(state): State<NoticeAppState<R>>,
    Path(notice_id): Path<String>,
    payload: Result<Json<UpdateNoticeRequest>, JsonRejection>,
) -> NoticeResult<Json<NoticeResponse>>
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = UpdateNoticeUseCase::new(state.repo.clone());
    let updated = use_case
        .execute(
            &notice_id,
            UpdateNoticeInput {
                title: req.title,
                content: req.content,
                category: req.category,
            },
        )
        .await?;

    Ok(Json(NoticeResponse::from(updated)))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /api/notices/{id} (admin)
pub async fn delete_notice<R>(
    State(state): State<NoticeAppState<R>>,
    Path(notice_id): Path<String>,
) -> NoticeResult<Json<MessageResponse>>
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteNoticeUseCase::new(state.repo.clone());
    use_case.execute(&notice_id).await?;

    Ok(Json(MessageResponse {
        message: "Notice deleted".to_string(),
    }))
}
