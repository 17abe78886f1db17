use std::sync::Arc;

use tracing::debug;

use crate::error::{EventResult, ValidationResult};
use crate::model::{Event, User};
use crate::validation;

/// Creates an event after checking the name, both timestamps, their order and
/// the attend limit. The dates stay stored as (trimmed) strings.
pub fn create_event(
    id: i64,
    name: &str,
    start_date: &str,
    end_date: &str,
    attend_limit: i64,
) -> ValidationResult<Event> {
    let valid_name = validation::non_blank(name, "name")?;
    let start = validation::timestamp(start_date, "start_date")?;
    let end = validation::timestamp(end_date, "end_date")?;
    validation::ordered(start, end)?;
    let limit = validation::non_negative(attend_limit)?;

    Ok(Event::new(id, valid_name, start_date.trim(), end_date.trim(), limit))
}

/// Reserves each user in turn and returns how many were accepted.
///
/// A full event refuses the rest without error. The first duplicated
/// reservation aborts the batch; seats taken before it are kept.
pub fn reserve_all(event: &mut Event, users: &[Arc<User>]) -> EventResult<usize> {
    let mut accepted = 0;
    for user in users {
        if event.reserve(user)? {
            accepted += 1;
        }
    }
    debug!(event_id = %event.id, requested = users.len(), accepted, "batch reservation");
    Ok(accepted)
}
