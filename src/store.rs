//! Connection pool setup.

use crate::config::ServerConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open the pool for `config.database_url`, creating the database file if it does not exist.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| ConfigError::Load(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(config.foreign_keys);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::debug!(url = %config.database_url, foreign_keys = config.foreign_keys, "pool connected");
    Ok(pool)
}

/// Single-connection in-memory pool. Every `:memory:` connection is its own database, so the
/// pool must never open a second one.
pub async fn connect_in_memory(foreign_keys: bool) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| ConfigError::Load(e.to_string()))?
        .foreign_keys(foreign_keys);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Round-trip a trivial statement; used by the readiness route.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
