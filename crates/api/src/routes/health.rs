//! Liveness and storage reachability for the watch-list service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Whether the record store answered the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageHealth {
    Reachable,
    Unreachable,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when storage is reachable, `degraded` otherwise.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub storage: StorageHealth,
}

/// GET /health
///
/// 200 while the store answers, 503 once it does not, so load balancers
/// stop routing to an instance that cannot serve the watch-list.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, storage) = match state.store.health_check().await {
        Ok(()) => (StatusCode::OK, "ok", StorageHealth::Reachable),
        Err(err) => {
            tracing::warn!(error = %err, "Watch-list store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", StorageHealth::Unreachable)
        }
    };

    let body = HealthResponse {
        status,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        storage,
    };
    (code, Json(body))
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
