pub mod health;
pub mod watchlist;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /watchlist            list (?name=), create
/// /watchlist/{id}       get, update (PUT or PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/watchlist", watchlist::router())
}
