//! Handlers for the `/watchlist` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use watchlist_core::error::CoreError;
use watchlist_core::watchlist::ENTITY_NAME;
use watchlist_db::models::record::{CreateRecord, Record, UpdateRecord};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, RecordId};
use crate::query::ListParams;
use crate::state::AppState;

/// POST /watchlist
///
/// Title and status are checked before the store is touched.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateRecord>,
) -> AppResult<(StatusCode, Json<Record>)> {
    input.validate()?;

    let record = state.store.create(&input).await?;
    tracing::info!(id = record.id, title = %record.title, "Watch-list record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /watchlist?name=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Record>>> {
    let records = match params.title_filter() {
        Some(title) => state.store.list_by_title(title).await?,
        None => state.store.list().await?,
    };
    tracing::debug!(count = records.len(), "Listed watch-list records");
    Ok(Json(records))
}

/// GET /watchlist/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Record>> {
    let record = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_NAME,
            id,
        }))?;
    Ok(Json(record))
}

/// PUT /watchlist/{id} (also mounted on PATCH)
///
/// Replaces every mutable field. The path id wins over any id in the body.
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(input): JsonBody<UpdateRecord>,
) -> AppResult<Json<Record>> {
    input.validate()?;

    let record = state.store.update(id, &input).await?;
    tracing::info!(id, status = %record.status, "Watch-list record updated");
    Ok(Json(record))
}

/// DELETE /watchlist/{id}
pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<StatusCode> {
    state.store.delete(id).await?;
    tracing::info!(id, "Watch-list record deleted");
    Ok(StatusCode::NO_CONTENT)
}
