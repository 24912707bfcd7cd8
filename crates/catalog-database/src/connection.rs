//! SQLite connection pool management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use catalog_core::config::DatabaseConfig;
use catalog_core::error::{AppError, ErrorKind};

use crate::bootstrap;
use crate::migration;

/// Wrapper around the sqlx SQLite connection pool.
///
/// Constructed explicitly and handed to the repositories that need it;
/// there is no process-wide handle.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: SqlitePool,
}

impl DatabasePool {
    /// Open the catalog described by `config`.
    ///
    /// Seeds the database file from the bundled catalog on first use, then
    /// connects and applies migrations when enabled.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, AppError> {
        let outcome = bootstrap::ensure_database(config).await?;
        info!(
            path = %config.path,
            outcome = ?outcome,
            max_connections = config.max_connections,
            "Opening catalog database"
        );

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreAccess,
                    format!("Failed to open catalog database '{}': {e}", config.path),
                    e,
                )
            })?;

        if config.run_migrations {
            migration::run_migrations(&pool).await?;
        }

        info!("Catalog database ready");
        Ok(Self { pool })
    }

    /// Open a private in-memory catalog with the schema applied.
    ///
    /// Every SQLite in-memory connection is a separate database, so the
    /// pool is pinned to exactly one connection that never expires.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| {
            AppError::with_source(ErrorKind::StoreAccess, "Invalid in-memory options", e)
        })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreAccess,
                    "Failed to open in-memory catalog",
                    e,
                )
            })?;

        migration::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Return the underlying sqlx pool (consuming self).
    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::StoreAccess, "Health check failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
