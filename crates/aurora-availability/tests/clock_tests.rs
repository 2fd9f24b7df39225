//! Tests for `HH:MM` wall-clock parsing and minute arithmetic.

use aurora_availability::clock::ClockTime;

fn t(s: &str) -> ClockTime {
    s.parse().unwrap()
}

#[test]
fn parses_to_minutes_since_midnight() {
    assert_eq!(t("00:00").minutes(), 0);
    assert_eq!(t("09:30").minutes(), 570);
    assert_eq!(t("23:59").minutes(), 1439);
}

#[test]
fn display_is_zero_padded() {
    assert_eq!(t("9:05").to_string(), "09:05");
    assert_eq!(ClockTime::from_minutes(65).unwrap().to_string(), "01:05");
}

#[test]
fn seconds_from_time_inputs_are_truncated() {
    assert_eq!(t("14:15:59"), t("14:15"));
}

#[test]
fn rejects_malformed_times() {
    for bad in ["", "24:00", "12:60", "12", "12:5a", "-1:00", "123:00", "12:00:60", "1:2:3:4"] {
        assert!(bad.parse::<ClockTime>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn error_message_echoes_input() {
    let err = "25:00".parse::<ClockTime>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid time: '25:00'");
}

#[test]
fn ordering_follows_minutes_across_hour_boundaries() {
    // String comparison would get "9:45" vs "10:00" wrong.
    assert!(t("9:45") < t("10:00"));
    assert!(t("16:30") < t("17:00"));
}

#[test]
fn saturating_sub_clamps_at_midnight() {
    assert_eq!(t("17:00").saturating_sub_minutes(30), t("16:30"));
    assert_eq!(t("00:15").saturating_sub_minutes(30), ClockTime::MIDNIGHT);
}

#[test]
fn checked_add_stops_at_midnight() {
    assert_eq!(t("16:30").checked_add_minutes(30), Some(t("17:00")));
    assert_eq!(t("23:30").checked_add_minutes(30), None);
}

#[test]
fn new_and_from_minutes_reject_out_of_range() {
    assert!(ClockTime::new(24, 0).is_none());
    assert!(ClockTime::new(0, 60).is_none());
    assert!(ClockTime::from_minutes(1440).is_none());
    assert_eq!(ClockTime::new(13, 45).unwrap().hour(), 13);
    assert_eq!(ClockTime::new(13, 45).unwrap().minute(), 45);
}

#[test]
fn serde_roundtrips_as_string() {
    assert_eq!(serde_json::to_string(&t("08:05")).unwrap(), "\"08:05\"");
    let parsed: ClockTime = serde_json::from_str("\"18:20\"").unwrap();
    assert_eq!(parsed, t("18:20"));
    assert!(serde_json::from_str::<ClockTime>("\"8pm\"").is_err());
}
