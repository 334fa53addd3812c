use thiserror::Error;

/// Reasons a date input fails the validity gate.
///
/// The public formatters fold these into `None`; the variants exist so the
/// reason can be logged and tested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("date string is empty")]
    Empty,

    #[error("expected 3 '-' separated components, found {0}")]
    ComponentCount(usize),

    #[error("date component '{0}' is not a number")]
    NotNumeric(String),

    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    OutOfRange { year: i32, month: u32, day: u32 },

    #[error("timestamp {0}ms is outside the representable range")]
    TimestampOutOfRange(i64),

    #[error("unrecognized date text '{0}'")]
    Unrecognized(String),
}
