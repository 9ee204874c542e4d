//! Notice Router
//!
//! Reads are public. Writes pass `require_auth` (401) and then
//! `require_admin` (403) before any handler runs.

use auth::TokenService;
use auth::middleware::{require_admin, require_auth};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::NoticeRepository;
use crate::infra::postgres::PgNoticeRepository;
use crate::presentation::handlers::{self, NoticeAppState};

/// Create the Notice router with PostgreSQL repository
pub fn notice_router(repo: PgNoticeRepository, tokens: Arc<TokenService>) -> Router {
    notice_router_generic(repo, tokens)
}

/// Create a generic Notice router for any repository implementation
pub fn notice_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: NoticeRepository + Clone + Send + Sync + 'static,
{
    let state = NoticeAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", post(handlers::create_notice::<R>))
        .route(
            "/{id}",
            put(handlers::update_notice::<R>).delete(handlers::delete_notice::<R>),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth))
        .route("/", get(handlers::list_notices::<R>))
        .with_state(state)
}
