//! Shared utilities for the PanaSystem back office.
//!
//! Date formatting for forms and tables, ISO week numbers, class-name merging and
//! the small string/validation helpers the front end screens call into.

pub mod error;
pub mod models;
pub mod utils;

pub use error::DateError;
pub use models::{DateInput, DateParts};
