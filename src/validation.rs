use chrono::NaiveDateTime;

use crate::error::{ValidationError, ValidationResult};

/// Timestamp layout used for event start and end dates, e.g. `2016-11-01 18:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ValidationResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ValidationError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Parses a timestamp in [`TIMESTAMP_FORMAT`], ignoring surrounding whitespace.
pub fn timestamp(value: &str, field: &str) -> ValidationResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        ValidationError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        }
    })
}

/// Validates that an attend limit is zero or more.
pub fn non_negative(limit: i64) -> ValidationResult<i64> {
    if limit < 0 {
        Err(ValidationError::NegativeLimit { limit })
    } else {
        Ok(limit)
    }
}

/// Validates that `end` does not come before `start`. Equal instants are allowed.
pub fn ordered(start: NaiveDateTime, end: NaiveDateTime) -> ValidationResult<()> {
    if end < start {
        Err(ValidationError::EndBeforeStart {
            start: start.format(TIMESTAMP_FORMAT).to_string(),
            end: end.format(TIMESTAMP_FORMAT).to_string(),
        })
    } else {
        Ok(())
    }
}
