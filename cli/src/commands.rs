use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use panasystem_shared::utils::validation;
use panasystem_shared::utils::{
    capitalize, cn, format_date_for_display, format_date_to_iso, today_date, today_stamp,
    week_number, Clock,
};
use panasystem_shared::{DateInput, DateParts};

use crate::config::CliSettings;
use crate::error::CliError;

// Printed wherever a formatter reports "no value"
const NULL: &str = "null";

#[derive(Parser, Debug)]
#[command(name = "pana", version, about = "PanaSystem date, class-name and form validation helpers")]
pub struct Args {
    /// JSON configuration file; the built-in defaults are used when absent
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Format date-picker parts as an ISO-8601 timestamp with offset
    ///
    /// The parts are a JSON object with year, month, day, hour, minute, second,
    /// millisecond and offset (milliseconds from UTC). `null` or no argument prints `null`.
    Iso { parts: Option<String> },
    /// Format a date as DD/MM/YYYY [HH:MM] using UTC fields
    Display {
        /// YYYY-MM-DD, an RFC 3339 timestamp, or epoch milliseconds with --millis
        date: String,
        /// Only print the date
        #[arg(long, conflicts_with = "time")]
        no_time: bool,
        /// Always print the time, whatever the configuration says
        #[arg(long)]
        time: bool,
        /// Read DATE as milliseconds since the Unix epoch
        #[arg(long)]
        millis: bool,
    },
    /// Print the ISO-8601 week number of a date
    Week { date: String },
    /// Print the current local time as YYYY-MM-DDTHH:MM
    Today {
        /// Print YYYY-MM-DD only
        #[arg(long)]
        date_only: bool,
    },
    /// Merge class lists, later conflicting utility classes win
    Cn { classes: Vec<String> },
    /// Upper-case the first letter, lower-case the rest
    Capitalize { text: Option<String> },
    /// Check a form value; prints true or false
    Validate { kind: ValidationKind, value: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Name,
    ProductName,
    Email,
    Phone,
    Amount,
    Price,
    Quantity,
    Date,
}

impl ValidationKind {
    fn check(self, value: &str) -> bool {
        match self {
            ValidationKind::Name => validation::is_valid_name(value),
            ValidationKind::ProductName => validation::is_valid_product_name(value),
            ValidationKind::Email => validation::is_valid_email(value),
            ValidationKind::Phone => validation::is_valid_phone(value),
            ValidationKind::Amount => validation::is_valid_amount(value),
            ValidationKind::Price => validation::is_valid_price(value),
            ValidationKind::Quantity => validation::is_valid_quantity(value),
            ValidationKind::Date => validation::is_valid_date(value),
        }
    }
}

/// Runs one command and returns what should be printed.
pub fn run(command: &Command, settings: &CliSettings, clock: &impl Clock) -> Result<String, CliError> {
    debug!("Running {:?}", command);
    let output = match command {
        Command::Iso { parts } => {
            let parts: Option<DateParts> = match parts {
                Some(json) => serde_json::from_str(json)?,
                None => None,
            };
            format_date_to_iso(parts.as_ref()).unwrap_or_else(|| NULL.to_string())
        }
        Command::Display { date, no_time, time, millis } => {
            let input = if *millis {
                let ms = date
                    .parse::<i64>()
                    .map_err(|e| CliError::InvalidInput(format!("'{}' is not a millisecond timestamp: {}", date, e)))?;
                DateInput::EpochMillis(ms)
            } else {
                DateInput::parse(date)
            };
            let show_time = if *no_time {
                false
            } else {
                *time || settings.display.show_time
            };
            format_date_for_display(Some(&input), show_time).unwrap_or_else(|| NULL.to_string())
        }
        Command::Week { date } => {
            let instant = DateInput::parse(date)
                .to_utc()
                .map_err(|e| CliError::InvalidInput(format!("'{}': {}", date, e)))?;
            week_number(&instant).to_string()
        }
        Command::Today { date_only } => {
            if *date_only {
                today_date(clock)
            } else {
                today_stamp(clock)
            }
        }
        Command::Cn { classes } => cn(classes.iter()),
        Command::Capitalize { text } => capitalize(text.as_deref()),
        Command::Validate { kind, value } => {
            let valid = kind.check(value);
            info!("Validated {:?} value: {}", kind, valid);
            valid.to_string()
        }
    };
    Ok(output)
}

/// Writes one command's output as a line.
pub fn emit(output: &str, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", output)?;
    out.flush()?;
    Ok(())
}
