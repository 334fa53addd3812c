//! Date formatting for API payloads and for display in tables and detail views.

use chrono::{Datelike, Timelike};

use super::text::pad;
use crate::models::{DateInput, DateParts};

const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// Renders date-picker parts as `YYYY-MM-DDTHH:MM:SS.mmm±HH:MM`, the format the
/// sales API expects.
///
/// Returns `None` when there is nothing to format. Fields are not range-checked.
pub fn format_date_to_iso(parts: Option<&DateParts>) -> Option<String> {
    let parts = parts?;

    let sign = if parts.offset >= 0 { '+' } else { '-' };
    let offset_minutes = parts.offset.unsigned_abs() / MILLIS_PER_MINUTE.unsigned_abs();
    let offset = format!("{}{}:{}", sign, pad(offset_minutes / 60, 2), pad(offset_minutes % 60, 2));

    Some(format!(
        "{}-{}-{}T{}:{}:{}.{}{}",
        pad(parts.year, 4),
        pad(parts.month, 2),
        pad(parts.day, 2),
        pad(parts.hour, 2),
        pad(parts.minute, 2),
        pad(parts.second, 2),
        pad(parts.millisecond, 3),
        offset
    ))
}

/// Renders a date as `DD/MM/YYYY`, followed by ` HH:MM` when `show_time` is set.
///
/// Calendar fields are always read in UTC. Date-only strings are midnight UTC, so
/// they never shift a day for users west of Greenwich. Absent or invalid input
/// gives `None`.
pub fn format_date_for_display(input: Option<&DateInput>, show_time: bool) -> Option<String> {
    let input = input?;
    if matches!(input, DateInput::DateOnly(text) if text.is_empty()) {
        return None;
    }

    let instant = match input.to_utc() {
        Ok(instant) => instant,
        Err(e) => {
            tracing::debug!("Not formatting {:?} for display: {}", input, e);
            return None;
        }
    };

    let mut out = format!(
        "{}/{}/{}",
        pad(instant.day(), 2),
        pad(instant.month(), 2),
        pad(instant.year(), 4)
    );
    if show_time {
        out.push(' ');
        out.push_str(&pad(instant.hour(), 2));
        out.push(':');
        out.push_str(&pad(instant.minute(), 2));
    }
    Some(out)
}
