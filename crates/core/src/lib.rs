//! Domain rules for the watch-list service.
//!
//! Nothing in this crate touches the network or the database; it holds the
//! error taxonomy, shared type aliases, and the field rules every layer agrees on.

pub mod error;
pub mod types;
pub mod watchlist;
