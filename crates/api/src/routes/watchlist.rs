//! Route definitions for the `/watchlist` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::watchlist;
use crate::state::AppState;

/// Routes mounted at `/watchlist`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(watchlist::list).post(watchlist::create))
        .route(
            "/{id}",
            get(watchlist::get_by_id)
                .put(watchlist::update)
                .patch(watchlist::update)
                .delete(watchlist::delete),
        )
}
