//! Repository for the `watch_list` table.

use async_trait::async_trait;
use sqlx::PgPool;
use watchlist_core::types::DbId;

use crate::models::record::{CreateRecord, Record, UpdateRecord};
use crate::store::{StoreError, StoreResult, WatchListStore};

/// Column list shared across queries to avoid repetition.
///
/// Optional columns are coalesced so rows always decode into zero values.
const COLUMNS: &str = "id, title, \
     COALESCE(total_episodes, 0) AS total_episodes, \
     COALESCE(watched_episodes, 0) AS watched_episodes, \
     COALESCE(type, '') AS type, \
     status";

/// PostgreSQL-backed [`WatchListStore`].
#[derive(Debug, Clone)]
pub struct WatchListRepo {
    pool: PgPool,
}

impl WatchListRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WatchListStore for WatchListRepo {
    async fn create(&self, input: &CreateRecord) -> StoreResult<Record> {
        let query = format!(
            "INSERT INTO watch_list (title, total_episodes, watched_episodes, type, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, Record>(&query)
            .bind(&input.title)
            .bind(input.total_episodes)
            .bind(input.watched_episodes)
            .bind(&input.kind)
            .bind(&input.status)
            .fetch_one(&self.pool)
            .await?;
        Ok(record)
    }

    async fn list(&self) -> StoreResult<Vec<Record>> {
        let query = format!("SELECT {COLUMNS} FROM watch_list ORDER BY id");
        let records = sqlx::query_as::<_, Record>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn list_by_title(&self, title: &str) -> StoreResult<Vec<Record>> {
        let query = format!("SELECT {COLUMNS} FROM watch_list WHERE title = $1 ORDER BY id");
        let records = sqlx::query_as::<_, Record>(&query)
            .bind(title)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Record>> {
        let query = format!("SELECT {COLUMNS} FROM watch_list WHERE id = $1");
        let record = sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn update(&self, id: DbId, input: &UpdateRecord) -> StoreResult<Record> {
        let query = format!(
            "UPDATE watch_list SET
                title = $2,
                total_episodes = $3,
                watched_episodes = $4,
                type = $5,
                status = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.total_episodes)
            .bind(input.watched_episodes)
            .bind(&input.kind)
            .bind(&input.status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM watch_list WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
