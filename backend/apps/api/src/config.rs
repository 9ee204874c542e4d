//! Server Configuration
//!
//! Everything comes from the environment (optionally via `.env`).

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::{AuthConfig, SeedAccount, UserRole};
use platform::crypto::from_base64;

/// Process-level configuration
#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub db_statement_timeout: Duration,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = parse_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 5000)))?;

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:3001".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout: Duration::from_secs(parse_or("DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            db_statement_timeout: Duration::from_millis(parse_or("DB_STATEMENT_TIMEOUT_MS", 5000)?),
            auth: auth_config_from_env()?,
        })
    }
}

fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    let base = match env::var("AUTH_TOKEN_SECRET") {
        Ok(secret_b64) => {
            let secret = from_base64(&secret_b64).context("AUTH_TOKEN_SECRET must be base64")?;
            AuthConfig {
                token_secret: secret,
                ..AuthConfig::default()
            }
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
            AuthConfig::with_random_secret()
        }
        Err(_) => bail!("AUTH_TOKEN_SECRET must be set in production"),
    };

    let token_ttl = Duration::from_secs(parse_or("AUTH_TOKEN_TTL_SECS", 24 * 3600)?);

    let password_pepper = env::var("AUTH_PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    let seed_accounts = AuthConfig::default_seed_accounts()
        .into_iter()
        .map(seed_from_env)
        .collect();

    Ok(AuthConfig {
        token_ttl,
        password_pepper,
        seed_accounts,
        ..base
    })
}

/// `AUTH_SEED_{ADMIN,USER}_{EMAIL,PASSWORD}` override the built-in seeds
fn seed_from_env(default: SeedAccount) -> SeedAccount {
    let prefix = match default.role {
        UserRole::Admin => "ADMIN",
        UserRole::User => "USER",
    };

    SeedAccount {
        email: env::var(format!("AUTH_SEED_{prefix}_EMAIL")).unwrap_or(default.email),
        password: env::var(format!("AUTH_SEED_{prefix}_PASSWORD")).unwrap_or(default.password),
        role: default.role,
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
