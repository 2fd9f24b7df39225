//! A speaker's weekly availability schedule.
//!
//! The speaker-profile API delivers availability as a JSON array of per-day
//! entries. Internally the week is a fixed array indexed by [`DayOfWeek`], so
//! every lookup is total and a missing day cannot be confused with a
//! misspelled one.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{AvailabilityError, Result};
use crate::weekday::DayOfWeek;

/// Availability for a single weekday.
///
/// `start_time..end_time` is the bookable window (start inclusive, end
/// exclusive). When `is_available` is false the times are kept but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub day: DayOfWeek,
    pub is_available: bool,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl DayAvailability {
    /// The entry used for days the speaker never configured: closed, with a
    /// 09:00–17:00 window ready for when they open it.
    pub fn closed(day: DayOfWeek) -> Self {
        DayAvailability {
            day,
            is_available: false,
            start_time: default_start(),
            end_time: default_end(),
        }
    }

    /// An open day with the given window.
    pub fn open(day: DayOfWeek, start_time: ClockTime, end_time: ClockTime) -> Self {
        DayAvailability {
            day,
            is_available: true,
            start_time,
            end_time,
        }
    }

    /// Window length in minutes; zero for closed or inverted windows.
    pub fn window_minutes(&self) -> u16 {
        if self.is_available {
            self.end_time.minutes().saturating_sub(self.start_time.minutes())
        } else {
            0
        }
    }
}

fn default_start() -> ClockTime {
    ClockTime::new(9, 0).unwrap_or(ClockTime::MIDNIGHT)
}

fn default_end() -> ClockTime {
    ClockTime::new(17, 0).unwrap_or(ClockTime::MIDNIGHT)
}

/// Seven days of availability, one entry per weekday, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DayAvailability>", into = "Vec<DayAvailability>")]
pub struct WeeklyAvailability {
    days: [DayAvailability; 7],
}

impl Default for WeeklyAvailability {
    /// A week with every day closed.
    fn default() -> Self {
        WeeklyAvailability {
            days: DayOfWeek::ALL.map(DayAvailability::closed),
        }
    }
}

impl WeeklyAvailability {
    /// Build a week from a list of entries in any order.
    ///
    /// Days missing from `entries` are filled with [`DayAvailability::closed`].
    ///
    /// # Errors
    /// Returns `AvailabilityError::DuplicateDay` if a weekday appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = DayAvailability>,
    {
        let mut seen = [false; 7];
        let mut week = WeeklyAvailability::default();

        for entry in entries {
            let idx = entry.day.index();
            if seen[idx] {
                return Err(AvailabilityError::DuplicateDay(entry.day));
            }
            seen[idx] = true;
            week.days[idx] = entry;
        }

        let filled = seen.iter().filter(|s| !**s).count();
        if filled > 0 {
            tracing::debug!(filled, "filled missing weekdays with closed defaults");
        }

        Ok(week)
    }

    /// Parse the speaker-profile JSON array.
    ///
    /// # Errors
    /// Returns `AvailabilityError::JsonParse` for malformed JSON, bad time
    /// strings or unknown weekdays, and `DuplicateDay` for repeated days.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<DayAvailability> = serde_json::from_str(json)?;
        WeeklyAvailability::from_entries(entries)
    }

    /// Serialize back to the speaker-profile JSON array (Monday first).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.days)?)
    }

    /// The entry for `day`.
    pub fn day(&self, day: DayOfWeek) -> &DayAvailability {
        &self.days[day.index()]
    }

    /// Iterate entries Monday first.
    pub fn iter(&self) -> impl Iterator<Item = &DayAvailability> {
        self.days.iter()
    }

    /// True if at least one weekday is open for bookings.
    pub fn has_any_availability(&self) -> bool {
        self.days.iter().any(|d| d.is_available)
    }

    /// Data-entry check that every open day's window starts before it ends.
    ///
    /// The booking-time functions in [`crate::validator`] stay total and do
    /// not call this; run it when a speaker saves their schedule.
    ///
    /// # Errors
    /// Returns `AvailabilityError::InvertedWindow` for the first open day
    /// whose `start_time >= end_time`.
    pub fn check_windows(&self) -> Result<()> {
        match self
            .days
            .iter()
            .find(|d| d.is_available && d.start_time >= d.end_time)
        {
            Some(d) => Err(AvailabilityError::InvertedWindow {
                day: d.day,
                start: d.start_time,
                end: d.end_time,
            }),
            None => Ok(()),
        }
    }
}

impl TryFrom<Vec<DayAvailability>> for WeeklyAvailability {
    type Error = AvailabilityError;

    fn try_from(entries: Vec<DayAvailability>) -> Result<Self> {
        WeeklyAvailability::from_entries(entries)
    }
}

impl From<WeeklyAvailability> for Vec<DayAvailability> {
    fn from(week: WeeklyAvailability) -> Self {
        week.days.to_vec()
    }
}
