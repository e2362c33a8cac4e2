//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the store in [`crate::state::AppState`] and map
//! errors via [`crate::error::AppError`].

pub mod watchlist;
