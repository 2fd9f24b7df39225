//! Weekday identifiers and date → weekday resolution.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::AvailabilityError;

/// One of the seven weekdays a speaker can publish availability for.
///
/// Serialized in lowercase (`"monday"`), matching the speaker-profile API.
/// The discriminant doubles as the Monday-first index into a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl DayOfWeek {
    /// All weekdays, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Monday-first position (Monday = 0, Sunday = 6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a Sunday = 0 day index (the convention of JavaScript's
    /// `Date.getDay()`) onto the enum. Indices wrap modulo 7.
    pub fn from_sunday_index(index: u32) -> Self {
        match index % 7 {
            0 => DayOfWeek::Sunday,
            1 => DayOfWeek::Monday,
            2 => DayOfWeek::Tuesday,
            3 => DayOfWeek::Wednesday,
            4 => DayOfWeek::Thursday,
            5 => DayOfWeek::Friday,
            _ => DayOfWeek::Saturday,
        }
    }

    /// Lowercase identifier used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }

    /// Capitalized name for user-facing messages.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        DayOfWeek::from_sunday_index(weekday.num_days_from_sunday())
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Parse a `YYYY-MM-DD` calendar date as submitted by an HTML date input.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDate` for empty or malformed input.
pub fn parse_date(date: &str) -> crate::error::Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AvailabilityError::InvalidDate(date.to_string()))
}

/// The weekday a calendar date falls on.
pub fn weekday_of(date: NaiveDate) -> DayOfWeek {
    date.weekday().into()
}

/// The weekday of a `YYYY-MM-DD` string, or `None` when the string is empty
/// or not a valid date. Callers must guard against `None` before lookup.
pub fn weekday_of_str(date: &str) -> Option<DayOfWeek> {
    parse_date(date).ok().map(weekday_of)
}
