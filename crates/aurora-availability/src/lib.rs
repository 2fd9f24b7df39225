//! # aurora-availability
//!
//! Availability-window validation for booking 30-minute practice sessions
//! with Aurora speakers.
//!
//! A speaker publishes a weekly schedule: for each weekday, whether they take
//! bookings and the local window they accept them in. This crate answers the
//! questions the booking dialog asks of that schedule. It performs no I/O and
//! keeps no state.
//!
//! ## Quick start
//!
//! ```rust
//! use aurora_availability::{
//!     parse_date, selectable_range, validate, ClockTime, WeeklyAvailability,
//! };
//!
//! let schedule = WeeklyAvailability::from_json(
//!     r#"[{"day":"monday","isAvailable":true,"startTime":"09:00","endTime":"17:00"}]"#,
//! )
//! .unwrap();
//! let monday = parse_date("2026-03-16").unwrap();
//!
//! let range = selectable_range(monday, &schedule);
//! assert_eq!(range.max.to_string(), "16:30");
//!
//! let late: ClockTime = "16:45".parse().unwrap();
//! assert!(validate(monday, late, &schedule).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`weekday`] — weekday enum and date → weekday resolution
//! - [`clock`] — `HH:MM` wall-clock times as minutes since midnight
//! - [`schedule`] — per-day entries and the enum-indexed week
//! - [`validator`] — bookability, picker bounds, validation, slot listing
//! - [`booking`] — booking candidates and the dialog's form reducer
//! - [`error`] — error types

pub mod booking;
pub mod clock;
pub mod error;
pub mod schedule;
pub mod validator;
pub mod weekday;

pub use booking::{BookingCandidate, BookingFormState, FormEvent};
pub use clock::ClockTime;
pub use error::{AvailabilityError, BookingError};
pub use schedule::{DayAvailability, WeeklyAvailability};
pub use validator::{
    accepts_sessions, is_bookable, next_bookable_date, selectable_range, slot_starts, validate,
    validation_message, TimeRange, SESSION_MINUTES,
};
pub use weekday::{parse_date, weekday_of, weekday_of_str, DayOfWeek};
