//! "Now" for new-record forms.
//!
//! Forms default their date fields to the current local time. The clock is
//! passed in so the defaults can be pinned in tests.

use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Timelike};

use super::text::pad;

/// Source of the current local date and time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the machine's clock in its local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// `YYYY-MM-DDTHH:MM` from the local calendar fields of `dt`, the value format
/// of a datetime-local input.
pub fn local_stamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    let local = dt.naive_local();
    format!(
        "{}T{}:{}",
        local_date(dt),
        pad(local.hour(), 2),
        pad(local.minute(), 2)
    )
}

/// Default value for datetime-local inputs: the clock's current local time.
pub fn today_stamp(clock: &impl Clock) -> String {
    local_stamp(&clock.now())
}

/// Default value for date-only inputs: `YYYY-MM-DD` of the clock's local day.
pub fn today_date(clock: &impl Clock) -> String {
    local_date(&clock.now())
}

fn local_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    let local = dt.naive_local();
    format!("{}-{}-{}", pad(local.year(), 4), pad(local.month(), 2), pad(local.day(), 2))
}
