//! WASM bindings for aurora-availability.
//!
//! Exposes the booking validator to the browser booking dialog via
//! `wasm-bindgen`. The weekly schedule crosses the boundary as the same JSON
//! array the speaker-profile endpoint returns; dates and times are the raw
//! strings from HTML date/time inputs.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p aurora-availability-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/availability-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/aurora_availability_wasm.wasm
//! ```

use aurora_availability::{ClockTime, TimeRange, WeeklyAvailability};
use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// `{min, max}` as bound to the time picker's `min`/`max` attributes.
#[derive(Serialize)]
struct TimeRangeDto {
    min: String,
    max: String,
    disabled: bool,
}

impl TimeRangeDto {
    fn new(range: TimeRange, sessions_fit: bool) -> Self {
        Self {
            min: range.min.to_string(),
            max: range.max.to_string(),
            disabled: !sessions_fit,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers: parse JS-side strings
// ---------------------------------------------------------------------------

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_schedule(json: &str) -> Result<WeeklyAvailability, JsValue> {
    WeeklyAvailability::from_json(json).map_err(to_js)
}

fn parse_date(date: &str) -> Result<NaiveDate, JsValue> {
    aurora_availability::parse_date(date).map_err(to_js)
}

fn parse_time(time: &str) -> Result<ClockTime, JsValue> {
    time.parse::<ClockTime>().map_err(to_js)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Weekday key (`"monday"`..`"sunday"`) for a `YYYY-MM-DD` date.
///
/// Returns an empty string when the date is empty or invalid, so the form can
/// call this on every keystroke without guarding.
#[wasm_bindgen(js_name = "weekdayOf")]
pub fn weekday_of(date: &str) -> String {
    aurora_availability::weekday_of_str(date)
        .map(|day| day.key().to_string())
        .unwrap_or_default()
}

/// Whether the speaker accepts bookings on the weekday `date` falls on.
#[wasm_bindgen(js_name = "isBookable")]
pub fn is_bookable(date: &str, schedule_json: &str) -> Result<bool, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    Ok(aurora_availability::is_bookable(parse_date(date)?, &schedule))
}

/// Start-time picker bounds for `date`, as `{"min","max","disabled"}` JSON.
///
/// Closed days yield `{"min":"00:00","max":"00:00","disabled":true}`. Open
/// days whose window is shorter than one session are also `disabled`.
#[wasm_bindgen(js_name = "selectableRange")]
pub fn selectable_range(date: &str, schedule_json: &str) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    let date = parse_date(date)?;
    let range = aurora_availability::selectable_range(date, &schedule);
    let sessions_fit = aurora_availability::accepts_sessions(date, &schedule);
    to_json(&TimeRangeDto::new(range, sessions_fit))
}

/// Validate a proposed session start.
///
/// Returns `undefined` when the booking is valid, otherwise the message to
/// show under the form. Throws only for unparseable input.
#[wasm_bindgen(js_name = "validateBooking")]
pub fn validate_booking(
    date: &str,
    time: &str,
    schedule_json: &str,
) -> Result<Option<String>, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    Ok(aurora_availability::validation_message(
        parse_date(date)?,
        parse_time(time)?,
        &schedule,
    ))
}

/// Every 30-minute session start on `date`, as a JSON array of `HH:MM`.
#[wasm_bindgen(js_name = "slotStarts")]
pub fn slot_starts(date: &str, schedule_json: &str) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    let slots: Vec<String> = aurora_availability::slot_starts(parse_date(date)?, &schedule)
        .iter()
        .map(ClockTime::to_string)
        .collect();
    to_json(&slots)
}

/// First bookable date on or after `from`, or `undefined` if the speaker has
/// no open weekday.
#[wasm_bindgen(js_name = "nextBookableDate")]
pub fn next_bookable_date(from: &str, schedule_json: &str) -> Result<Option<String>, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    Ok(
        aurora_availability::next_bookable_date(parse_date(from)?, &schedule)
            .map(|d| d.format("%Y-%m-%d").to_string()),
    )
}
