use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::ids::Id;
use super::user::User;
use crate::error::{EventError, EventResult};

/// An event with a capacity-bounded roster of attendees.
///
/// The limit is fixed at construction and the roster only changes through
/// [`Event::reserve`] and [`Event::unreserve`], so a non-negative limit always
/// satisfies `attend_number() <= attend_limit()`.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: Id<Event>,
    pub name: String,
    /// Opaque timestamp string, never parsed by the event itself.
    pub start_date: String,
    pub end_date: String,
    attend_limit: i64,
    #[serde(serialize_with = "roster_as_list")]
    attendees: IndexMap<Id<User>, Arc<User>>,
}

fn roster_as_list<S: Serializer>(
    roster: &IndexMap<Id<User>, Arc<User>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(roster.values())
}

impl Event {
    /// Stores the arguments verbatim with an empty roster. Neither the date
    /// order nor the sign of the limit is checked; a limit of zero or less
    /// makes every reservation return `Ok(false)`.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        attend_limit: i64,
    ) -> Self {
        Self {
            id: Id::new(id),
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            attend_limit,
            attendees: IndexMap::new(),
        }
    }

    /// Adds `user` to the roster.
    ///
    /// Returns `Ok(false)` when there is no room left. Only while room remains
    /// is the roster checked for `user.id`; a repeat reservation then fails
    /// with [`EventError::DuplicatedReservation`]. A full event therefore
    /// answers `Ok(false)` even for a user already on it.
    pub fn reserve(&mut self, user: &Arc<User>) -> EventResult<bool> {
        if self.is_full() {
            debug!(event_id = %self.id, user_id = %user.id, limit = self.attend_limit, "event full, reservation refused");
            return Ok(false);
        }

        if self.attendees.contains_key(&user.id) {
            warn!(event_id = %self.id, user_id = %user.id, "duplicated reservation");
            return Err(EventError::DuplicatedReservation);
        }

        self.attendees.insert(user.id, Arc::clone(user));
        debug!(event_id = %self.id, user_id = %user.id, attendees = self.attendees.len(), "reserved");

        if self.is_full() {
            info!(event_id = %self.id, limit = self.attend_limit, "event is now full");
        }
        Ok(true)
    }

    /// Removes the user with `user.id` from the roster. Unknown users are ignored.
    pub fn unreserve(&mut self, user: &User) {
        // shift_remove keeps the remaining attendees in reservation order
        if self.attendees.shift_remove(&user.id).is_some() {
            debug!(event_id = %self.id, user_id = %user.id, attendees = self.attendees.len(), "reservation cancelled");
        }
    }

    pub fn attend_limit(&self) -> i64 {
        self.attend_limit
    }

    pub fn attend_number(&self) -> usize {
        self.attendees.len()
    }

    /// Attendees in reservation order.
    pub fn attendees(&self) -> impl Iterator<Item = &Arc<User>> {
        self.attendees.values()
    }

    pub fn attendee(&self, user_id: Id<User>) -> Option<&Arc<User>> {
        self.attendees.get(&user_id)
    }

    pub fn is_attending(&self, user_id: Id<User>) -> bool {
        self.attendees.contains_key(&user_id)
    }

    pub fn is_full(&self) -> bool {
        let count = i64::try_from(self.attend_number()).unwrap_or(i64::MAX);
        self.attend_limit <= count
    }

    /// Seats still open; zero for a full event or a non-positive limit.
    pub fn remaining_seats(&self) -> usize {
        usize::try_from(self.attend_limit)
            .unwrap_or(0)
            .saturating_sub(self.attend_number())
    }
}
