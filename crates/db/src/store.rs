//! Storage capability consumed by the HTTP layer.
//!
//! Handlers hold an `Arc<dyn WatchListStore>`, so tests can swap the
//! PostgreSQL repository for an in-memory double.

use async_trait::async_trait;
use watchlist_core::types::DbId;

use crate::models::record::{CreateRecord, Record, UpdateRecord};

/// Errors surfaced by a [`WatchListStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matched the given id.
    #[error("No record found with id {0}")]
    NotFound(DbId),

    /// The statement failed to execute.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Create, read, update, and delete access to watch-list records.
///
/// Each call issues a single statement. Dropping the returned future aborts
/// the statement, which is how client disconnects and request timeouts
/// cancel in-flight work.
#[async_trait]
pub trait WatchListStore: Send + Sync {
    /// Insert a record and return it with the store-assigned id.
    async fn create(&self, input: &CreateRecord) -> StoreResult<Record>;

    /// All records. An empty table yields an empty vec.
    async fn list(&self) -> StoreResult<Vec<Record>>;

    /// Records whose title equals `title` exactly.
    async fn list_by_title(&self, title: &str) -> StoreResult<Vec<Record>>;

    /// A single record, or `None` if the id is unknown.
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Record>>;

    /// Overwrite every mutable column of the record with `id`.
    ///
    /// Fails with [`StoreError::NotFound`] when no row matches.
    async fn update(&self, id: DbId, input: &UpdateRecord) -> StoreResult<Record>;

    /// Permanently remove the record with `id`.
    ///
    /// Fails with [`StoreError::NotFound`] when no row matches, so a second
    /// delete of the same id is an error.
    async fn delete(&self, id: DbId) -> StoreResult<()>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}
