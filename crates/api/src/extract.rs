//! Custom Axum extractors.
//!
//! Both reject with [`AppError`] so malformed input always produces the
//! same 400 JSON shape as every other error.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use watchlist_core::types::DbId;
use watchlist_core::watchlist::{invalid_record_id, parse_record_id};

use crate::error::AppError;

/// Record id taken from the `{id}` path segment.
///
/// Anything other than a positive integer is a validation error, including
/// segments that fail to percent-decode.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub DbId);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                let segment = parts.uri.path().rsplit('/').next().unwrap_or_default();
                invalid_record_id(segment)
            })?;

        let id = parse_record_id(&raw)?;
        Ok(Self(id))
    }
}

/// JSON request body.
///
/// Decodes the raw body whatever the `Content-Type` header says. Only an
/// unreadable body or invalid JSON for `T` is rejected, always with a 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?;
        Ok(Self(value))
    }
}
