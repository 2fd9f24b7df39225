//! Wall-clock local times in minutes since midnight.
//!
//! Availability windows arrive as `HH:MM` strings. Comparing those strings
//! directly breaks across hour boundaries once arithmetic is involved, so all
//! comparisons and offsets happen on the minute count and the string form is
//! only produced for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AvailabilityError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A local wall-clock time with minute precision (`00:00`..=`23:59`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// Build from hour and minute, rejecting out-of-range components.
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(ClockTime {
                minutes: hour * 60 + minute,
            })
        } else {
            None
        }
    }

    /// Build from minutes since midnight. Returns `None` past `23:59`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(ClockTime { minutes })
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(self) -> u16 {
        self.minutes % 60
    }

    /// Shift earlier by `minutes`, clamping at midnight.
    pub fn saturating_sub_minutes(self, minutes: u16) -> Self {
        ClockTime {
            minutes: self.minutes.saturating_sub(minutes),
        }
    }

    /// Shift later by `minutes`, or `None` if that crosses midnight.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        self.minutes
            .checked_add(minutes)
            .and_then(ClockTime::from_minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = AvailabilityError;

    /// Parse `HH:MM`. A trailing `:SS` (as some browsers submit from time
    /// inputs) is accepted and truncated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AvailabilityError::InvalidTime(s.to_string());

        let mut parts = s.trim().split(':');
        let hour = parse_component(parts.next()).ok_or_else(invalid)?;
        let minute = parse_component(parts.next()).ok_or_else(invalid)?;
        if let Some(seconds) = parts.next() {
            match parse_component(Some(seconds)) {
                Some(sec) if sec < 60 => {}
                _ => return Err(invalid()),
            }
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        ClockTime::new(hour, minute).ok_or_else(invalid)
    }
}

/// A one- or two-digit numeric component.
fn parse_component(part: Option<&str>) -> Option<u16> {
    let part = part?;
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl TryFrom<String> for ClockTime {
    type Error = AvailabilityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}
