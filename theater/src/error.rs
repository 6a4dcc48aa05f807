//! Error types for scheduling, pricing and reservations.

use crate::rounding::RoundingError;
use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for theater operations.
pub type Result<T> = std::result::Result<T, TheaterError>;

/// Every way a theater operation can fail.
///
/// Variants are distinguishable by kind so a caller (or the CLI) can render an
/// appropriate message. Errors are `Clone + PartialEq` so the booking reducer can
/// keep the last one in its state and tests can compare against it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TheaterError {
    // ═══════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════

    /// Malformed construction arguments for a domain entity.
    #[error("{entity} cannot be created: {reason}")]
    Validation {
        /// Entity being constructed (`Movie`, `Showing`, ...)
        entity: &'static str,
        /// What was wrong with the arguments
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════
    // Booking
    // ═══════════════════════════════════════════════════════════

    /// Booking requested for a date earlier than the reference date.
    #[error("cannot book tickets for showing in the past: {show_date} is before {today}")]
    PastDate {
        /// Requested show date
        show_date: NaiveDate,
        /// Reference date the request was checked against
        today: NaiveDate,
    },

    /// No lineup registered for the requested date.
    #[error("not able to find any showing for showDate: {show_date}")]
    ScheduleNotFound {
        /// Requested show date
        show_date: NaiveDate,
    },

    /// The requested sequence number has no showing on that date.
    #[error("not able to find any showing for given sequence {sequence} on {show_date}")]
    SequenceNotFound {
        /// Requested show date
        show_date: NaiveDate,
        /// Requested sequence number
        sequence: u32,
    },

    /// Requested audience count exceeds the seats left for the showing.
    #[error("not enough tickets left for the showing: requested {requested}, remaining {remaining}")]
    CapacityExceeded {
        /// Seats requested
        requested: u32,
        /// Seats left when the request was checked
        remaining: u32,
    },

    // ═══════════════════════════════════════════════════════════
    // Helpers
    // ═══════════════════════════════════════════════════════════

    /// Money rounding failed.
    #[error(transparent)]
    Rounding(#[from] RoundingError),

    /// Hour or hour range outside `0..=23`, or an inverted range.
    #[error("invalid hour range: hour {hour} within [{lower}, {upper}]")]
    InvalidHourRange {
        /// Hour being checked
        hour: u32,
        /// Lower bound (inclusive)
        lower: u32,
        /// Upper bound (inclusive)
        upper: u32,
    },

    /// Day of month outside `1..=31`.
    #[error("invalid day of month: {day}")]
    InvalidDay {
        /// Requested day
        day: u32,
    },

    // ═══════════════════════════════════════════════════════════
    // Presentation
    // ═══════════════════════════════════════════════════════════

    /// A presentation adapter could not render its output.
    #[error("failed to render schedule: {0}")]
    Render(String),
}

impl TheaterError {
    /// Shorthand for a [`TheaterError::Validation`].
    #[must_use]
    pub fn validation(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            entity,
            reason: reason.into(),
        }
    }
}
