use super::*;

#[test]
fn last_update_label_just_now() {
    assert_eq!(last_update_label(10_000.0, 10_000.0), "Last update: just now");
    assert_eq!(last_update_label(10_000.0, 14_999.0), "Last update: just now");
}

#[test]
fn last_update_label_seconds() {
    assert_eq!(last_update_label(0.0, 23_000.0), "Last update: 23 seconds ago");
}

#[test]
fn last_update_label_minutes_and_hours() {
    assert_eq!(last_update_label(0.0, 61_000.0), "Last update: 1 minute ago");
    assert_eq!(last_update_label(0.0, 5.0 * 60_000.0), "Last update: 5 minutes ago");
    assert_eq!(last_update_label(0.0, 3_600_000.0), "Last update: 1 hour ago");
    assert_eq!(last_update_label(0.0, 3.0 * 3_600_000.0), "Last update: 3 hours ago");
}

#[test]
fn last_update_label_clock_skew_reads_just_now() {
    assert_eq!(last_update_label(50_000.0, 10_000.0), "Last update: just now");
}

#[test]
fn now_ms_outside_browser_is_zero() {
    assert!(now_ms().abs() < f64::EPSILON);
}
