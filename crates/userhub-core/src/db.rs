//! Postgres pool bootstrap.
//!
//! One pool per process, opened at startup and shared through each service's
//! `AppState`. Failing to connect is a startup error, never a panic.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::{DatabaseSection, DATABASE_URI_ENV};
use crate::error::{Result, UserHubError};

pub async fn connect(cfg: &DatabaseSection) -> Result<PgPool> {
    if cfg.uri.trim().is_empty() {
        return Err(UserHubError::Internal(format!(
            "database uri is not set ({DATABASE_URI_ENV})"
        )));
    }

    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_millis(cfg.acquire_timeout_ms))
        .connect(&cfg.uri)
        .await
        .map_err(|e| UserHubError::Database(format!("connect failed: {e}")))?;

    tracing::info!(max_connections = cfg.max_connections, "database pool ready");
    Ok(pool)
}
