//! Integration tests for the date and class-name utilities
//!
//! These go through the public API the screens use and check the behavior
//! the forms and tables rely on.

use chrono::{TimeZone, Utc};
use panasystem_shared::cn;
use panasystem_shared::utils::{
    format_date_for_display, format_date_to_iso, today_stamp, week_number, FixedClock,
};
use panasystem_shared::{DateInput, DateParts};
use regex::Regex;

#[test]
fn test_iso_output_matches_pattern_for_valid_parts() {
    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}[+-]\d{2}:\d{2}$").unwrap();
    let samples = vec![
        (1, 1, 1, 0, 0, 0, 0, 0),
        (2024, 2, 29, 23, 59, 59, 999, -3 * 3_600_000),
        (999, 12, 31, 12, 30, 15, 5, 14 * 3_600_000),
        (2030, 6, 15, 7, 8, 9, 10, -(9 * 3_600_000 + 30 * 60_000)),
    ];

    for (year, month, day, hour, minute, second, millisecond, offset) in samples {
        let parts = DateParts { year, month, day, hour, minute, second, millisecond, offset };
        let iso = format_date_to_iso(Some(&parts)).unwrap();
        assert!(pattern.is_match(&iso), "Unexpected ISO output: {}", iso);
    }
}

#[test]
fn test_iso_from_json_parts() {
    // Shape sent by the sale form's date picker
    let json = r#"{"year":2024,"month":3,"day":5,"hour":14,"minute":30,"second":0,"millisecond":0,"offset":-10800000}"#;
    let parts: DateParts = serde_json::from_str(json).unwrap();
    assert_eq!(format_date_to_iso(Some(&parts)).as_deref(), Some("2024-03-05T14:30:00.000-03:00"));
}

#[test]
fn test_absent_inputs_give_none() {
    assert_eq!(format_date_to_iso(None), None);
    assert_eq!(format_date_for_display(None, true), None);
    assert_eq!(format_date_for_display(None, false), None);
}

#[test]
fn test_display_rejects_garbage() {
    let input = DateInput::parse("not-a-date");
    assert_eq!(format_date_for_display(Some(&input), true), None);
}

#[test]
fn test_display_date_only_without_time() {
    let input = DateInput::parse("2024-03-05");
    assert_eq!(format_date_for_display(Some(&input), false).as_deref(), Some("05/03/2024"));
}

#[test]
fn test_display_timestamp_uses_utc_fields() {
    let input = DateInput::parse("2024-03-05T23:45:00Z");
    assert_eq!(format_date_for_display(Some(&input), true).as_deref(), Some("05/03/2024 23:45"));

    // The same instant written with an offset renders identically
    let input = DateInput::parse("2024-03-05T20:45:00-03:00");
    assert_eq!(format_date_for_display(Some(&input), true).as_deref(), Some("05/03/2024 23:45"));
}

#[test]
fn test_week_number_year_boundaries() {
    assert_eq!(week_number(&Utc.with_ymd_and_hms(2021, 1, 4, 0, 0, 0).unwrap()), 1);
    assert_eq!(week_number(&Utc.with_ymd_and_hms(2020, 12, 31, 0, 0, 0).unwrap()), 53);
}

#[test]
fn test_today_stamp_with_fixed_clock() {
    let tz = chrono::FixedOffset::west_opt(3 * 3600).unwrap();
    let clock = FixedClock(tz.with_ymd_and_hms(2024, 11, 2, 8, 4, 0).unwrap());
    assert_eq!(today_stamp(&clock), "2024-11-02T08:04");
}

#[test]
fn test_cn_examples() {
    assert_eq!(cn!["p-2", "p-4"], "p-4");
    assert_eq!(cn!["a", false, None::<&str>, "b"], "a b");
}

#[test]
fn test_cn_component_style_overrides() {
    // A button's base classes overridden by a caller-supplied class prop
    let base = "inline-flex items-center rounded-md px-4 py-2 text-sm font-medium bg-primary text-primary-foreground";
    let variant_destructive = true;
    let out = cn![
        base,
        ("bg-destructive", variant_destructive),
        Some("px-2 rounded-full w-full"),
    ];
    assert_eq!(
        out,
        "inline-flex items-center py-2 text-sm font-medium text-primary-foreground bg-destructive px-2 rounded-full w-full"
    );
}
