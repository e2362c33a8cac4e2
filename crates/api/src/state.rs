use std::sync::Arc;

use watchlist_db::WatchListStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Watch-list storage. PostgreSQL in production, an in-memory double in tests.
    pub store: Arc<dyn WatchListStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WatchListStore>) -> Self {
        Self { store }
    }
}
