// Command line front end for the PanaSystem shared utilities.
// The binary in main.rs only parses arguments, sets up logging and prints.

pub mod commands;
pub mod config;
pub mod error;

pub use commands::{emit, run, Args, Command};
pub use config::CliSettings;
pub use error::CliError;
