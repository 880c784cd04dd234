use super::*;

#[test]
fn leap_year_rules() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2026));
}

#[test]
fn month_lengths() {
    assert_eq!(days_in_month(2026, 1), 31);
    assert_eq!(days_in_month(2026, 4), 30);
    assert_eq!(days_in_month(2026, 2), 28);
    assert_eq!(days_in_month(2024, 2), 29);
}

#[test]
fn weekday_of_first_matches_known_dates() {
    // 2026-08-01 is a Saturday, 2026-01-01 a Thursday, 2024-02-01 a Thursday.
    assert_eq!(weekday_of_first(2026, 8), 6);
    assert_eq!(weekday_of_first(2026, 1), 4);
    assert_eq!(weekday_of_first(2024, 2), 4);
}

#[test]
fn parse_ymd_accepts_valid_and_rejects_garbage() {
    assert_eq!(parse_ymd("2026-08-06"), Some((2026, 8, 6)));
    assert_eq!(parse_ymd("2024-02-29"), Some((2024, 2, 29)));
    assert_eq!(parse_ymd("2026-02-29"), None);
    assert_eq!(parse_ymd("2026-13-01"), None);
    assert_eq!(parse_ymd("2026-00-10"), None);
    assert_eq!(parse_ymd("not-a-date"), None);
    assert_eq!(parse_ymd(""), None);
}

#[test]
fn month_cursor_wraps_across_year_boundaries() {
    assert_eq!(MonthCursor::new(2026, 1).prev(), MonthCursor::new(2025, 12));
    assert_eq!(MonthCursor::new(2026, 12).next(), MonthCursor::new(2027, 1));
    assert_eq!(MonthCursor::new(2026, 6).next(), MonthCursor::new(2026, 7));
}

#[test]
fn month_cursor_label_and_containment() {
    let cursor = MonthCursor::new(2026, 8);
    assert_eq!(cursor.label(), "August 2026");
    assert!(cursor.contains("2026-08-15"));
    assert!(!cursor.contains("2026-07-31"));
    assert!(!cursor.contains("bogus"));
}
