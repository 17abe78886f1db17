//! In-memory event registration: events with a capacity limit and a roster
//! of users, supporting reservation and cancellation.

pub mod error;
pub mod validation;
pub mod model;
pub mod ops;
