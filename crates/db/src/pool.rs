//! Postgres connection pool.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared Postgres pool used across the whole application.
pub type DbPool = PgPool;

/// Pool settings collected from the command line / environment.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Create a new connection pool and verify the database is reachable.
pub async fn create_pool(config: &PoolConfig) -> Result<DbPool, DbError> {
    info!(
        "Connecting to database (max_connections={}, acquire_timeout={:?})",
        config.max_connections, config.acquire_timeout
    );
    let pool = config.options().connect(&config.database_url).await?;
    Ok(pool)
}

/// Create a pool that opens connections only on first use.
///
/// Used where a handle is needed before (or without) a reachable server.
pub fn create_lazy_pool(config: &PoolConfig) -> Result<DbPool, DbError> {
    let pool = config.options().connect_lazy(&config.database_url)?;
    Ok(pool)
}
