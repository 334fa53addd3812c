// CLI settings, loaded from the embedded default JSON or a user-supplied file
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::error::CliError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CliSettings {
    pub version: String,
    pub display: DisplaySettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    // Whether `display` appends HH:MM when no flag is given
    pub show_time: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    // tracing-subscriber filter directive, e.g. "warn" or "panasystem_shared=debug"
    pub filter: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        CliSettings {
            version: env!("CARGO_PKG_VERSION").to_string(),
            display: DisplaySettings::default(),
            log: LogSettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings { show_time: true }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: "warn".to_string(),
        }
    }
}

impl CliSettings {
    /// Settings shipped with the binary.
    pub fn load_default() -> Result<Self, CliError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    /// Reads settings from `path`; fields missing from the file keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, CliError> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json(&config_str)
    }

    /// Picks the file when one is given, otherwise the embedded defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_default(),
        }
    }

    fn from_json(config_str: &str) -> Result<Self, CliError> {
        let settings: CliSettings = serde_json::from_str(config_str)?;
        if settings.log.filter.trim().is_empty() {
            return Err(CliError::ConfigError("log.filter must not be empty".to_string()));
        }
        Ok(settings)
    }
}
