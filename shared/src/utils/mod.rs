//! Utility functions
//!
//! Pure helpers called from the form, table and profile screens: date
//! formatting, week numbers, "today" defaults, class-name merging, string
//! helpers and input validation.

pub mod classes;
pub mod clock;
pub mod dates;
pub mod text;
pub mod validation;
pub mod week;

pub use classes::{cn, ClassInput};
pub use clock::{local_stamp, today_date, today_stamp, Clock, FixedClock, SystemClock};
pub use dates::{format_date_for_display, format_date_to_iso};
pub use text::{capitalize, date_part, pad};
pub use week::week_number;
