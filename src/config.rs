// src/config.rs
use std::net::IpAddr;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TOKEN_TTL_HOURS: i64 = 8;
const DEFAULT_SYNC_DELAY_MS: u64 = 3000;
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// Runtime settings read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    /// Time a product spends in `syncing` before it is marked `synced`.
    pub sync_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("HOST")
            .ok()
            .and_then(|h| h.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::from([127, 0, 0, 1]));
        let port = parse_var("PORT").unwrap_or(DEFAULT_PORT);
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| AppError::internal("JWT_SECRET must be set"))?;
        if jwt_secret.trim().is_empty() {
            return Err(AppError::internal("JWT_SECRET must not be empty"));
        }
        let token_ttl_hours = token_ttl_or_default(parse_var("TOKEN_TTL_HOURS"));
        let sync_delay = Duration::from_millis(
            parse_var("SYNC_DELAY_MS").unwrap_or(DEFAULT_SYNC_DELAY_MS),
        );

        Ok(Self { host, port, jwt_secret, token_ttl_hours, sync_delay })
    }

    /// Settings for in-process use (tests, tooling) that skip the environment.
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            jwt_secret: jwt_secret.into(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            sync_delay: Duration::from_millis(DEFAULT_SYNC_DELAY_MS),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment value");
            None
        }
    }
}

/// Token lifetimes must be between one hour and a year.
fn token_ttl_or_default(hours: Option<i64>) -> i64 {
    match hours {
        Some(h) if (1..=MAX_TOKEN_TTL_HOURS).contains(&h) => h,
        Some(h) => {
            tracing::warn!(value = h, max = MAX_TOKEN_TTL_HOURS, "TOKEN_TTL_HOURS out of range, using default");
            DEFAULT_TOKEN_TTL_HOURS
        }
        None => DEFAULT_TOKEN_TTL_HOURS,
    }
}
