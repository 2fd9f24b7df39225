//! Booking candidates and the booking dialog's form state.
//!
//! The dialog holds a date, a start time, and whatever advisory error the
//! current combination produces. [`BookingFormState::reduce`] applies one
//! edit and returns the next state; the previous state is never mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::BookingError;
use crate::schedule::WeeklyAvailability;
use crate::validator::{self, TimeRange, SESSION_MINUTES};
use crate::weekday::{weekday_of, DayOfWeek};

/// A proposed 30-minute session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCandidate {
    pub date: NaiveDate,
    pub start: ClockTime,
}

impl BookingCandidate {
    pub fn new(date: NaiveDate, start: ClockTime) -> Self {
        BookingCandidate { date, start }
    }

    pub fn weekday(&self) -> DayOfWeek {
        weekday_of(self.date)
    }

    /// When the session ends, or `None` if it would run past midnight.
    pub fn end(&self) -> Option<ClockTime> {
        self.start.checked_add_minutes(SESSION_MINUTES)
    }

    /// Validate this candidate against a schedule.
    pub fn check(&self, schedule: &WeeklyAvailability) -> Result<(), BookingError> {
        validator::validate(self.date, self.start, schedule)
    }
}

/// One user edit to the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The date input changed; `None` when it was cleared.
    DateChanged(Option<NaiveDate>),
    /// The time input changed; `None` when it was cleared.
    TimeChanged(Option<ClockTime>),
    /// The dialog was closed or re-opened.
    Reset,
}

/// Snapshot of the booking dialog's fields and derived constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingFormState {
    date: Option<NaiveDate>,
    time: Option<ClockTime>,
    range: Option<TimeRange>,
    sessions_fit: bool,
    error: Option<BookingError>,
}

impl BookingFormState {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one edit and re-derive the time bounds and advisory error.
    ///
    /// Validation only runs once both fields are filled; clearing either
    /// field clears the error.
    pub fn reduce(self, schedule: &WeeklyAvailability, event: FormEvent) -> Self {
        let (date, time) = match event {
            FormEvent::DateChanged(date) => (date, self.time),
            FormEvent::TimeChanged(time) => (self.date, time),
            FormEvent::Reset => return Self::default(),
        };

        let range = date.map(|d| validator::selectable_range(d, schedule));
        let sessions_fit = date.is_some_and(|d| validator::accepts_sessions(d, schedule));
        let error = match (date, time) {
            (Some(d), Some(t)) => validator::validate(d, t, schedule).err(),
            _ => None,
        };

        tracing::trace!(?date, ?time, ?error, "booking form updated");

        BookingFormState {
            date,
            time,
            range,
            sessions_fit,
            error,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<ClockTime> {
        self.time
    }

    /// Picker bounds for the selected date; `None` until a date is chosen.
    pub fn range(&self) -> Option<TimeRange> {
        self.range
    }

    /// True when the time picker should be disabled: no date yet, the
    /// chosen weekday is closed, or its window is shorter than one session.
    pub fn time_disabled(&self) -> bool {
        !self.sessions_fit
    }

    pub fn error(&self) -> Option<&BookingError> {
        self.error.as_ref()
    }

    /// The message to show under the form, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// The booking to submit, present only for a complete and valid form.
    pub fn candidate(&self) -> Option<BookingCandidate> {
        match (self.date, self.time, self.error) {
            (Some(date), Some(start), None) => Some(BookingCandidate::new(date, start)),
            _ => None,
        }
    }
}
