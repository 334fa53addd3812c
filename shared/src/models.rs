use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

// Largest distance from the epoch a date value may carry, in milliseconds (±100 million days).
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// Broken-down date/time as produced by the date pickers in the sale forms.
///
/// `offset` is the signed distance from UTC in milliseconds. Nothing here is
/// validated: whatever the caller puts in is what gets formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    #[serde(default)]
    pub millisecond: u32,
    #[serde(default)]
    pub offset: i64,
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for DateParts {
    fn from(dt: &DateTime<Tz>) -> Self {
        let offset_secs = dt.offset().fix().local_minus_utc();
        let local = dt.naive_local();
        Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            // Leap seconds report 1000+ here
            millisecond: dt.timestamp_subsec_millis().min(999),
            offset: i64::from(offset_secs) * 1000,
        }
    }
}

/// A value handed to the display formatter.
///
/// The caller says which kind of value it holds instead of the formatter
/// guessing from its shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateInput {
    /// `YYYY-MM-DD`, read as midnight UTC.
    DateOnly(String),
    /// An instant, used as-is.
    Instant(DateTime<Utc>),
    /// Milliseconds since the Unix epoch; may be out of range.
    EpochMillis(i64),
}

impl DateInput {
    /// Classifies loosely typed text.
    ///
    /// Anything that looks like a timestamp is parsed as RFC 3339, or as a
    /// zone-less `YYYY-MM-DDTHH:MM[:SS]` taken as UTC. Everything else is kept as
    /// a date-only string and checked when it is formatted.
    pub fn parse(text: &str) -> Self {
        if text.contains('T') || text.contains(' ') {
            if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                return DateInput::Instant(dt.with_timezone(&Utc));
            }
            if let Some(naive) = parse_naive_datetime(text) {
                return DateInput::Instant(naive.and_utc());
            }
        }
        DateInput::DateOnly(text.to_string())
    }

    /// Normalizes the input to a UTC instant, or explains why it is invalid.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, DateError> {
        match self {
            DateInput::DateOnly(text) => {
                let date = parse_date_only(text)?;
                Ok(date.and_time(NaiveTime::MIN).and_utc())
            }
            DateInput::Instant(dt) => Ok(*dt),
            DateInput::EpochMillis(ms) => {
                if ms.unsigned_abs() > MAX_EPOCH_MILLIS.unsigned_abs() {
                    return Err(DateError::TimestampOutOfRange(*ms));
                }
                DateTime::from_timestamp_millis(*ms).ok_or(DateError::TimestampOutOfRange(*ms))
            }
        }
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::DateOnly(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::DateOnly(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::Instant(dt.with_timezone(&Utc))
    }
}

/// Splits `YYYY-MM-DD` into its three components and builds the calendar date.
pub fn parse_date_only(text: &str) -> Result<NaiveDate, DateError> {
    if text.is_empty() {
        return Err(DateError::Empty);
    }
    // Carries a time part that did not parse as a timestamp
    if text.contains(['T', ' ', ':']) {
        return Err(DateError::Unrecognized(text.to_string()));
    }

    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 3 {
        return Err(DateError::ComponentCount(parts.len()));
    }

    let year: i32 = parse_component(parts[0])?;
    let month: u32 = parse_component(parts[1])?;
    let day: u32 = parse_component(parts[2])?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::OutOfRange { year, month, day })
}

fn parse_component<T: std::str::FromStr>(part: &str) -> Result<T, DateError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::NotNumeric(part.to_string()));
    }
    part.parse().map_err(|_| DateError::NotNumeric(part.to_string()))
}

fn parse_naive_datetime(text: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}
