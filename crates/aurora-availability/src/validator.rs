//! Booking validation against a weekly availability schedule.
//!
//! Every function here is pure: the schedule is only read, and the same
//! inputs always produce the same answer. A session always lasts
//! [`SESSION_MINUTES`], so the latest bookable start is the window's end
//! minus one session.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::BookingError;
use crate::schedule::{DayAvailability, WeeklyAvailability};
use crate::weekday::weekday_of;

/// Length of every practice session, in minutes.
pub const SESSION_MINUTES: u16 = 30;

/// Inclusive bounds for the start-time picker on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub min: ClockTime,
    pub max: ClockTime,
}

impl TimeRange {
    /// The range reported for days with no availability. Use
    /// [`accepts_sessions`] to decide whether the time input is enabled.
    pub const CLOSED: TimeRange = TimeRange {
        min: ClockTime::MIDNIGHT,
        max: ClockTime::MIDNIGHT,
    };
}

/// The schedule entry for `date`, if that weekday is open.
fn open_entry(date: NaiveDate, schedule: &WeeklyAvailability) -> Option<&DayAvailability> {
    let entry = schedule.day(weekday_of(date));
    entry.is_available.then_some(entry)
}

/// True if the speaker accepts bookings on the weekday `date` falls on.
pub fn is_bookable(date: NaiveDate, schedule: &WeeklyAvailability) -> bool {
    open_entry(date, schedule).is_some()
}

/// True when at least one full session fits on `date`: the weekday is open
/// and its window is no shorter than [`SESSION_MINUTES`].
///
/// This is what enables the time picker. Comparing the range against
/// [`TimeRange::CLOSED`] is not equivalent: an open 00:00–00:30 window also
/// yields `{00:00, 00:00}`.
pub fn accepts_sessions(date: NaiveDate, schedule: &WeeklyAvailability) -> bool {
    open_entry(date, schedule).is_some_and(|entry| entry.window_minutes() >= SESSION_MINUTES)
}

/// Earliest and latest selectable start times on `date`.
///
/// `min` is the day's `start_time`; `max` is `end_time` minus one session so
/// a session started at `max` ends exactly when the window closes. Returns
/// [`TimeRange::CLOSED`] when the day is not bookable.
pub fn selectable_range(date: NaiveDate, schedule: &WeeklyAvailability) -> TimeRange {
    match open_entry(date, schedule) {
        Some(entry) => TimeRange {
            min: entry.start_time,
            max: entry.end_time.saturating_sub_minutes(SESSION_MINUTES),
        },
        None => TimeRange::CLOSED,
    }
}

/// Check a proposed session start against the schedule.
///
/// # Errors
/// - `BookingError::DayUnavailable` when the weekday is closed.
/// - `BookingError::TimeOutOfRange` when the session would start before the
///   window opens or end after it closes. The error echoes the day's window.
pub fn validate(
    date: NaiveDate,
    time: ClockTime,
    schedule: &WeeklyAvailability,
) -> Result<(), BookingError> {
    let day = weekday_of(date);
    let entry = schedule.day(day);

    if !entry.is_available {
        tracing::debug!(%date, %day, "booking rejected: day unavailable");
        return Err(BookingError::DayUnavailable { day });
    }

    let window_start = entry.start_time.minutes();
    let window_end = entry.end_time.minutes();
    let proposed = time.minutes();
    let session_end = proposed + SESSION_MINUTES;

    if proposed < window_start || session_end > window_end {
        tracing::debug!(
            %date,
            %day,
            %time,
            window_start = %entry.start_time,
            window_end = %entry.end_time,
            "booking rejected: time out of range"
        );
        return Err(BookingError::TimeOutOfRange {
            day,
            start: entry.start_time,
            end: entry.end_time,
        });
    }

    Ok(())
}

/// [`validate`], flattened to the message the booking form shows inline.
/// `None` means the booking is valid.
pub fn validation_message(
    date: NaiveDate,
    time: ClockTime,
    schedule: &WeeklyAvailability,
) -> Option<String> {
    validate(date, time, schedule).err().map(|e| e.to_string())
}

/// Every session start on `date`, one per [`SESSION_MINUTES`], from the
/// window's opening up to the last start that still fits.
///
/// Empty when the day is closed or the window is shorter than one session.
pub fn slot_starts(date: NaiveDate, schedule: &WeeklyAvailability) -> Vec<ClockTime> {
    let Some(entry) = open_entry(date, schedule) else {
        return Vec::new();
    };

    let mut slots = Vec::new();
    let mut cursor = entry.start_time.minutes();
    while cursor + SESSION_MINUTES <= entry.end_time.minutes() {
        if let Some(start) = ClockTime::from_minutes(cursor) {
            slots.push(start);
        }
        cursor += SESSION_MINUTES;
    }
    slots
}

/// The first date on or after `from` that falls on an open weekday.
///
/// Only one week ahead is examined, since the schedule repeats weekly.
/// Returns `None` when every day is closed.
pub fn next_bookable_date(from: NaiveDate, schedule: &WeeklyAvailability) -> Option<NaiveDate> {
    (0..7u64)
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .find(|date| is_bookable(*date, schedule))
}
