//! Tests for weekly schedule construction, normalization, and data-entry checks.

use aurora_availability::schedule::{DayAvailability, WeeklyAvailability};
use aurora_availability::{AvailabilityError, ClockTime, DayOfWeek};

fn t(s: &str) -> ClockTime {
    s.parse().unwrap()
}

// ── Normalization ───────────────────────────────────────────────────────────

#[test]
fn missing_days_are_filled_closed() {
    let week = WeeklyAvailability::from_entries([DayAvailability::open(
        DayOfWeek::Tuesday,
        t("10:00"),
        t("14:00"),
    )])
    .unwrap();

    assert_eq!(week.iter().count(), 7);
    assert!(week.day(DayOfWeek::Tuesday).is_available);
    for day in DayOfWeek::ALL.into_iter().filter(|d| *d != DayOfWeek::Tuesday) {
        let entry = week.day(day);
        assert_eq!(entry.day, day);
        assert!(!entry.is_available);
        assert_eq!(entry.start_time, t("09:00"));
        assert_eq!(entry.end_time, t("17:00"));
    }
}

#[test]
fn entries_are_stored_monday_first_regardless_of_input_order() {
    let week = WeeklyAvailability::from_entries([
        DayAvailability::closed(DayOfWeek::Sunday),
        DayAvailability::open(DayOfWeek::Monday, t("08:00"), t("12:00")),
    ])
    .unwrap();

    let order: Vec<DayOfWeek> = week.iter().map(|d| d.day).collect();
    assert_eq!(order, DayOfWeek::ALL.to_vec());
}

#[test]
fn duplicate_day_is_rejected() {
    let err = WeeklyAvailability::from_entries([
        DayAvailability::open(DayOfWeek::Friday, t("09:00"), t("10:00")),
        DayAvailability::closed(DayOfWeek::Friday),
    ])
    .unwrap_err();

    assert!(matches!(err, AvailabilityError::DuplicateDay(DayOfWeek::Friday)));
    assert_eq!(err.to_string(), "Duplicate availability entry for Friday");
}

#[test]
fn default_week_is_fully_closed() {
    let week = WeeklyAvailability::default();
    assert!(!week.has_any_availability());
}

#[test]
fn window_minutes_is_zero_for_closed_and_inverted_days() {
    let day_shift = DayAvailability::open(DayOfWeek::Monday, t("09:00"), t("17:00"));
    let inverted = DayAvailability::open(DayOfWeek::Monday, t("17:00"), t("09:00"));

    assert_eq!(day_shift.window_minutes(), 480);
    assert_eq!(DayAvailability::closed(DayOfWeek::Monday).window_minutes(), 0);
    assert_eq!(inverted.window_minutes(), 0);
}

// ── JSON ────────────────────────────────────────────────────────────────────

#[test]
fn parses_speaker_profile_json() {
    let json = r#"[
        {"day": "monday", "isAvailable": true, "startTime": "09:00", "endTime": "17:00"},
        {"day": "sunday", "isAvailable": false, "startTime": "09:00", "endTime": "17:00"}
    ]"#;
    let week = WeeklyAvailability::from_json(json).unwrap();

    assert!(week.day(DayOfWeek::Monday).is_available);
    assert_eq!(week.day(DayOfWeek::Monday).end_time, t("17:00"));
    assert!(!week.day(DayOfWeek::Sunday).is_available);
    assert!(!week.day(DayOfWeek::Wednesday).is_available);
}

#[test]
fn json_with_duplicate_days_fails() {
    let json = r#"[
        {"day": "monday", "isAvailable": true, "startTime": "09:00", "endTime": "17:00"},
        {"day": "monday", "isAvailable": false, "startTime": "09:00", "endTime": "17:00"}
    ]"#;
    let err = WeeklyAvailability::from_json(json).unwrap_err();
    assert!(matches!(err, AvailabilityError::DuplicateDay(DayOfWeek::Monday)));
}

#[test]
fn json_with_bad_time_or_day_fails() {
    let bad_time =
        r#"[{"day": "monday", "isAvailable": true, "startTime": "9am", "endTime": "17:00"}]"#;
    assert!(matches!(
        WeeklyAvailability::from_json(bad_time),
        Err(AvailabilityError::JsonParse(_))
    ));

    let bad_day =
        r#"[{"day": "funday", "isAvailable": true, "startTime": "09:00", "endTime": "17:00"}]"#;
    assert!(WeeklyAvailability::from_json(bad_day).is_err());
}

#[test]
fn json_roundtrip_emits_all_seven_days() {
    let json =
        r#"[{"day": "thursday", "isAvailable": true, "startTime": "12:00", "endTime": "15:30"}]"#;
    let week = WeeklyAvailability::from_json(json).unwrap();

    let out = week.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["day"], "monday");
    assert_eq!(entries[3]["isAvailable"], true);
    assert_eq!(entries[3]["endTime"], "15:30");

    assert_eq!(WeeklyAvailability::from_json(&out).unwrap(), week);
}

#[test]
fn serde_deserialize_applies_normalization() {
    let week: WeeklyAvailability = serde_json::from_str("[]").unwrap();
    assert_eq!(week, WeeklyAvailability::default());
}

// ── Data-entry window checks ────────────────────────────────────────────────

#[test]
fn check_windows_accepts_well_formed_week() {
    let week = WeeklyAvailability::from_entries([
        DayAvailability::open(DayOfWeek::Monday, t("09:00"), t("17:00")),
        DayAvailability::open(DayOfWeek::Tuesday, t("00:00"), t("23:59")),
    ])
    .unwrap();
    assert!(week.check_windows().is_ok());
}

#[test]
fn check_windows_rejects_inverted_and_empty_windows() {
    let inverted = WeeklyAvailability::from_entries([DayAvailability::open(
        DayOfWeek::Wednesday,
        t("18:00"),
        t("09:00"),
    )])
    .unwrap();
    let err = inverted.check_windows().unwrap_err();
    assert_eq!(err.to_string(), "Wednesday window starts at 18:00 but ends at 09:00");

    let empty = WeeklyAvailability::from_entries([DayAvailability::open(
        DayOfWeek::Thursday,
        t("10:00"),
        t("10:00"),
    )])
    .unwrap();
    assert!(matches!(
        empty.check_windows(),
        Err(AvailabilityError::InvertedWindow { day: DayOfWeek::Thursday, .. })
    ));
}

#[test]
fn check_windows_ignores_closed_days() {
    let week = WeeklyAvailability::from_entries([DayAvailability {
        day: DayOfWeek::Friday,
        is_available: false,
        start_time: t("20:00"),
        end_time: t("08:00"),
    }])
    .unwrap();
    assert!(week.check_windows().is_ok());
}
