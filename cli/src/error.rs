use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    // Input the chosen operation cannot work with, e.g. a malformed date for `week`
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit code for this error: 2 for bad input or config, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ConfigError(_) | CliError::InvalidInput(_) | CliError::JsonError { .. } => 2,
            CliError::IoError { .. } | CliError::AnyhowError(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidInput("x".to_string()).exit_code(), 2);
        assert_eq!(CliError::ConfigError("x".to_string()).exit_code(), 2);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(CliError::from(io).exit_code(), 1);
    }

    #[test]
    fn test_messages() {
        let err = CliError::InvalidInput("'2024-02-30' is not a date".to_string());
        assert_eq!(err.to_string(), "Invalid input: '2024-02-30' is not a date");
    }
}
