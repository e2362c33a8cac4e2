//! Persistence layer for the watch-list service.
//!
//! Owns the `watch_list` table: pool construction, migrations, the row model,
//! and the [`WatchListStore`] capability the HTTP layer is written against.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{StoreError, WatchListStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create a connection pool, retrying up to `attempts` times with a fixed
/// `interval` between tries. The last connection error is returned once the
/// attempts are exhausted.
pub async fn connect_with_retry(
    database_url: &str,
    max_connections: u32,
    attempts: u32,
    interval: Duration,
) -> Result<DbPool, sqlx::Error> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match create_pool(database_url, max_connections).await {
            Ok(pool) => return Ok(pool),
            Err(err) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    error = %err,
                    "Failed to connect to database, retrying"
                );
                tokio::time::sleep(interval).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
