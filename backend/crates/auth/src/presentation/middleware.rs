//! Auth Middleware
//!
//! Bearer-token guards for protected routes. Compose them with
//! `route_layer`, `require_auth` outermost:
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/", post(create))
//!     .route_layer(middleware::from_fn(require_admin))
//!     .route_layer(middleware::from_fn_with_state(tokens, require_auth))
//! ```

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::{BearerError, extract_bearer};
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::error::AuthError;

pub use crate::application::token::AuthenticatedUser;

/// Middleware that requires a valid bearer token
///
/// Inserts [`AuthenticatedUser`] into the request extensions.
pub async fn require_auth(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers())?;
    let identity = tokens.verify(token)?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Middleware that requires the authenticated user to be an admin
///
/// Must run after [`require_auth`]; without an identity it answers 401.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, AuthError> {
    let identity = req.extensions().get::<AuthenticatedUser>().copied();

    match identity {
        None => Err(AuthError::MissingToken(BearerError::Missing)),
        Some(user) if !user.is_admin() => {
            tracing::warn!(user_id = %user.user_id, "Admin route refused");
            Err(AuthError::Forbidden)
        }
        Some(_) => Ok(next.run(req).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;
    use axum::http::{StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use kernel::id::UserId;
    use std::time::Duration;
    use tower::ServiceExt;

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(&[7u8; 32], Duration::from_secs(600)).unwrap())
    }

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.role.to_string()
    }

    fn app(tokens: Arc<TokenService>) -> Router {
        Router::new()
            .route("/admin", get(whoami))
            .route_layer(middleware::from_fn(require_admin))
            .route_layer(middleware::from_fn_with_state(tokens.clone(), require_auth))
            .route("/member", get(whoami))
            .route_layer(middleware::from_fn_with_state(tokens, require_auth))
    }

    async fn call(app: Router, path: &str, bearer: Option<&str>) -> StatusCode {
        let mut req = Request::builder().uri(path);
        if let Some(token) = bearer {
            req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        app.oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let app = app(tokens());
        assert_eq!(call(app.clone(), "/admin", None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(call(app, "/member", None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bad_token_is_401() {
        let app = app(tokens());
        assert_eq!(
            call(app.clone(), "/admin", Some("garbage")).await,
            StatusCode::UNAUTHORIZED
        );

        let foreign = TokenService::new(&[9u8; 32], Duration::from_secs(600))
            .unwrap()
            .issue(&UserId::new(), UserRole::Admin)
            .unwrap();
        assert_eq!(
            call(app, "/admin", Some(&foreign.token)).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_user_token_is_403_on_admin_route() {
        let tokens = tokens();
        let user = tokens.issue(&UserId::new(), UserRole::User).unwrap();
        let app = app(tokens);

        assert_eq!(
            call(app.clone(), "/admin", Some(&user.token)).await,
            StatusCode::FORBIDDEN
        );
        assert_eq!(call(app, "/member", Some(&user.token)).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_token_passes() {
        let tokens = tokens();
        let admin = tokens.issue(&UserId::new(), UserRole::Admin).unwrap();

        assert_eq!(
            call(app(tokens), "/admin", Some(&admin.token)).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_admin_guard_alone_is_401() {
        let app = Router::new()
            .route("/admin", get(|| async { "ok" }))
            .route_layer(middleware::from_fn(require_admin));

        assert_eq!(call(app, "/admin", None).await, StatusCode::UNAUTHORIZED);
    }
}
