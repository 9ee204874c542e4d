//! HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::application::{
    AuthConfig, AuthenticatedUser, CurrentUserUseCase, LoginInput, LoginUseCase, RegisterInput,
    RegisterUseCase, TokenService,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<AuthResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    // Self-service accounts are always plain users
    let role = match req.role.as_deref() {
        None => UserRole::User,
        Some(code) => match UserRole::from_code(code)? {
            UserRole::User => UserRole::User,
            UserRole::Admin => {
                return Err(AuthError::InvalidInput(
                    "Only the user role can be registered".to_string(),
                ));
            }
        },
    };

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(RegisterInput {
            email: req.email,
            password: req.password,
            role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::from(output))))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(AuthResponse::from(output)))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurrentUserUseCase::new(state.repo.clone());
    let user = use_case.execute(&identity).await?;

    Ok(Json(UserResponse::from(&user)))
}
