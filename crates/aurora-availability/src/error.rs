//! Error types for availability parsing and booking validation.

use thiserror::Error;

use crate::clock::ClockTime;
use crate::weekday::DayOfWeek;

/// Errors raised while reading dates, times, or availability records.
#[derive(Error, Debug)]
pub enum AvailabilityError {
    /// A calendar date was not in `YYYY-MM-DD` form.
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    /// A wall-clock time was not in `HH:MM` form, or was out of range.
    #[error("Invalid time: '{0}'")]
    InvalidTime(String),

    /// The same weekday appeared twice in an availability list.
    #[error("Duplicate availability entry for {0}")]
    DuplicateDay(DayOfWeek),

    /// An available day whose window does not open before it closes.
    #[error("{day} window starts at {start} but ends at {end}")]
    InvertedWindow {
        day: DayOfWeek,
        start: ClockTime,
        end: ClockTime,
    },

    /// The availability JSON could not be parsed.
    #[error("Availability JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout aurora-availability.
pub type Result<T> = std::result::Result<T, AvailabilityError>;

/// Advisory reasons a candidate booking is rejected.
///
/// These are shown inline in the booking form and are recoverable by the
/// learner picking a different date or time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    #[error("The speaker is not available on {day}. Please choose another date.")]
    DayUnavailable { day: DayOfWeek },

    #[error(
        "Please choose a start time between {start} and {end} on {day} \
         so the 30-minute session fits."
    )]
    TimeOutOfRange {
        day: DayOfWeek,
        start: ClockTime,
        end: ClockTime,
    },
}

impl BookingError {
    /// The weekday the rejection refers to.
    pub fn day(&self) -> DayOfWeek {
        match self {
            BookingError::DayUnavailable { day } | BookingError::TimeOutOfRange { day, .. } => *day,
        }
    }
}
