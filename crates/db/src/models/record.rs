//! Watch-list record model and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use watchlist_core::error::CoreError;
use watchlist_core::types::DbId;
use watchlist_core::watchlist;

/// A row from the `watch_list` table.
///
/// Nullable columns are coalesced on read, so optional fields always carry
/// their zero value.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Record {
    pub id: DbId,
    pub title: String,
    pub total_episodes: i32,
    pub watched_episodes: i32,
    /// Release type such as `TV`, `Movie`, or `OVA`.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub status: String,
}

/// DTO for creating a new record.
///
/// Missing or `null` fields decode to zero values. An `id` in the body is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_episodes: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub watched_episodes: i32,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// Decode a JSON `null` as the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// DTO for updating a record. Updates replace every mutable column, so the
/// payload has the same shape as a create.
pub type UpdateRecord = CreateRecord;

impl CreateRecord {
    /// Check the required fields before the payload reaches storage.
    pub fn validate(&self) -> Result<(), CoreError> {
        watchlist::validate_title(&self.title)?;
        watchlist::validate_status(&self.status)?;
        Ok(())
    }

    /// Combine the payload with a store-assigned id.
    pub fn into_record(self, id: DbId) -> Record {
        Record {
            id,
            title: self.title,
            total_episodes: self.total_episodes,
            watched_episodes: self.watched_episodes,
            kind: self.kind,
            status: self.status,
        }
    }
}
