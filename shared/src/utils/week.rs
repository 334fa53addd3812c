// ISO-8601 week numbers for the weekly statistics view
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// ISO-8601 week number (1..=53) of the UTC calendar date of `date`.
///
/// The date is moved to the Thursday of its week, and that Thursday's year
/// decides which year the week belongs to.
pub fn week_number<Tz: TimeZone>(date: &DateTime<Tz>) -> u32 {
    let day = date.with_timezone(&Utc).date_naive();

    // Monday = 1 .. Sunday = 7
    let day_of_week = i64::from(day.weekday().number_from_monday());
    let Some(thursday) = day.checked_add_signed(Duration::days(4 - day_of_week)) else {
        // The Thursday lies past the last representable date
        return day.iso_week().week();
    };

    // ceil(ordinal / 7); ordinal is 1-based
    (thursday.ordinal() + 6) / 7
}
