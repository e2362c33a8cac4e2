//! Repository layer.
//!
//! Each repository wraps a `PgPool` and implements a storage capability
//! from [`crate::store`].

pub mod watch_list_repo;

pub use watch_list_repo::WatchListRepo;
