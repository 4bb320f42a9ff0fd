use super::*;

// =============================================================
// date_label
// =============================================================

#[test]
fn date_label_takes_calendar_part() {
    assert_eq!(date_label(Some("2024-01-01")), "2024-01-01");
    assert_eq!(date_label(Some("2025-06-30T14:05:00.123456")), "2025-06-30");
}

#[test]
fn date_label_falls_back_for_missing_or_garbled_values() {
    assert_eq!(date_label(None), "Unknown");
    assert_eq!(date_label(Some("yesterday")), "Unknown");
    assert_eq!(date_label(Some("2024/01/01")), "Unknown");
}

// =============================================================
// clock_label
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn clock_label_takes_time_of_day() {
    assert_eq!(clock_label("2024-03-01T13:45:12.000Z"), "13:45:12");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn clock_label_returns_input_when_unparseable() {
    assert_eq!(clock_label("noon"), "noon");
    assert_eq!(clock_label("2024-03-01T1:2"), "2024-03-01T1:2");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_iso_outside_browser_is_epoch() {
    assert_eq!(now_iso(), "1970-01-01T00:00:00.000Z");
}
