use thiserror::Error;

/// Errors raised by reservations. A full event is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Duplicated reservation")]
    DuplicatedReservation,
}

impl EventError {
    /// Stable numeric code callers can assert on.
    pub fn code(&self) -> u32 {
        match self {
            EventError::DuplicatedReservation => 1,
        }
    }
}

pub type EventResult<T> = Result<T, EventError>;

/// Errors from the checked constructors in `ops`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} is not a valid timestamp: {value}")]
    InvalidTimestamp { field: String, value: String },

    #[error("Attend limit cannot be negative: {limit}")]
    NegativeLimit { limit: i64 },

    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: String, end: String },
}

impl ValidationError {
    /// Codes continue after [`EventError`]'s so the two never collide.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::BlankField { .. } => 2,
            ValidationError::InvalidTimestamp { .. } => 3,
            ValidationError::NegativeLimit { .. } => 4,
            ValidationError::EndBeforeStart { .. } => 5,
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
