//! Field rules for watch-list records.
//!
//! `title` and `status` are the only required fields. Episode counts and the
//! release type are optional and fall back to their zero values.

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in not-found errors.
pub const ENTITY_NAME: &str = "Record";

/// Validate a record title: must not be empty.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    require_non_empty("title", title)
}

/// Validate a record status: must not be empty.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    require_non_empty("status", status)
}

/// Parse a record id taken from a URL path segment.
///
/// Only positive integers are accepted; storage never assigns `0` or below.
pub fn parse_record_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid_record_id(raw)),
    }
}

/// The error for a path segment that is not a usable record id.
pub fn invalid_record_id(raw: &str) -> CoreError {
    CoreError::Validation(format!("Invalid ID '{raw}': expected a positive integer"))
}

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
