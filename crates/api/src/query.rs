//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /watchlist` (`?name=`).
///
/// `name` filters by exact title. An empty value is treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
}

impl ListParams {
    /// The title filter, if one was given.
    pub fn title_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
