//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::{AuthConfig, TokenService};
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(
    repo: PgUserRepository,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
) -> Router {
    auth_router_generic(repo, config, tokens)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens: tokens.clone(),
        config,
    };

    Router::new()
        .route("/me", get(handlers::me::<R>))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth))
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryUserRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Arc::new(AuthConfig::with_random_secret());
        let tokens = Arc::new(TokenService::from_config(&config).unwrap());
        auth_router_generic(InMemoryUserRepository::new(), config, tokens)
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(path: &str, body: Value) -> Request<Body> {
        Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_login_me() {
        let app = app();

        let (status, body) = send(
            &app,
            post_json(
                "/register",
                json!({"email": "alice@example.com", "password": "pw123"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["email"], "alice@example.com");
        assert_eq!(body["user"]["role"], "user");
        assert!(body["user"].get("passwordHash").is_none());
        assert!(body["token"].is_string());

        let (status, body) = send(
            &app,
            post_json(
                "/login",
                json!({"email": "alice@example.com", "password": "pw123"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();
        let user_id = body["user"]["id"].clone();

        let (status, body) = send(
            &app,
            Request::get("/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], user_id);
        assert!(body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_me_requires_token() {
        let (status, body) = send(
            &app(),
            Request::get("/me").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Authentication required");
    }

    #[tokio::test]
    async fn test_duplicate_register_is_400() {
        let app = app();
        let req = || {
            post_json(
                "/register",
                json!({"email": "alice@example.com", "password": "pw123"}),
            )
        };

        assert_eq!(send(&app, req()).await.0, StatusCode::CREATED);
        let (status, body) = send(&app, req()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Email is already registered");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let app = app();
        send(
            &app,
            post_json(
                "/register",
                json!({"email": "alice@example.com", "password": "pw123"}),
            ),
        )
        .await;

        let wrong = send(
            &app,
            post_json(
                "/login",
                json!({"email": "alice@example.com", "password": "wrong"}),
            ),
        )
        .await;
        let unknown = send(
            &app,
            post_json(
                "/login",
                json!({"email": "nobody@example.com", "password": "pw123"}),
            ),
        )
        .await;

        assert_eq!(wrong.0, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong, unknown);
    }

    #[tokio::test]
    async fn test_register_rejects_admin_role() {
        let (status, _) = send(
            &app(),
            post_json(
                "/register",
                json!({"email": "mallory@example.com", "password": "pw123", "role": "admin"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_accepts_explicit_user_role() {
        let (status, body) = send(
            &app(),
            post_json(
                "/register",
                json!({"email": "bob@example.com", "password": "pw123", "role": "user"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["role"], "user");
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_400() {
        let app = app();

        let (status, _) = send(
            &app,
            post_json(
                "/register",
                json!({"email": "a@example.com", "password": "pw123", "isAdmin": true}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            post_json("/login", json!({"email": "a@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Request::post("/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
