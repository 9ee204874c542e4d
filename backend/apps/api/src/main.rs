//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `AuthError` / `NoticeError` rendered through `kernel::error::AppError`.

mod config;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use auth::{BootstrapUseCase, PgUserRepository, TokenService, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use notice::{PgNoticeRepository, notice_router};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,notice=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let connect_options = PgConnectOptions::from_str(&config.database_url)
        .context("DATABASE_URL is not a valid Postgres URL")?
        .options([(
            "statement_timeout",
            config.db_statement_timeout.as_millis().to_string(),
        )]);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_with(connect_options)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth setup
    let auth_config = Arc::new(config.auth);
    let tokens = Arc::new(TokenService::from_config(&auth_config)?);
    let user_store = PgUserRepository::new(pool.clone());

    // Seed accounts: errors here should not prevent server startup
    let bootstrap = BootstrapUseCase::new(
        Arc::new(user_store.clone()),
        tokens.clone(),
        auth_config.clone(),
    );
    match bootstrap.execute().await {
        Ok(output) => {
            tracing::info!(
                created = output.created,
                existing = output.existing,
                "Seed account bootstrap completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Seed account bootstrap failed, continuing anyway"
            );
        }
    }

    let notice_store = PgNoticeRepository::new(pool.clone());

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(user_store, auth_config, tokens.clone()),
        )
        .nest("/api/notices", notice_router(notice_store, tokens))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
