//! Startup configuration for the output facility.
//!
//! Settings come from environment variables and are overridden by
//! command-line flags; no configuration files are read.
pub mod paths;

use std::path::PathBuf;

use crate::error::{ConfigError, OutputError};
use crate::output::Output;

/// Environment variable for the initial verbosity threshold.
pub const VERBOSITY_ENV: &str = "DLO_VERBOSITY";
/// Environment variable for the initial debug threshold.
pub const DEBUG_LEVEL_ENV: &str = "DLO_DEBUG_LEVEL";
/// Environment variable naming the log file.
pub const LOGFILE_ENV: &str = "DLO_LOGFILE";

/// Thresholds and log destination to apply to an [`Output`] at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Highest note level that is emitted.
    pub verbosity: i32,
    /// Highest debug level that is emitted.
    pub debug_level: i32,
    /// Log file to open; `None` leaves file logging as it is.
    pub logfile: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLevel`] if a level variable is set but is
    /// not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    ///
    /// Unset and blank variables keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlo::config::Settings;
    ///
    /// let settings = Settings::from_lookup(|key| match key {
    ///     "DLO_VERBOSITY" => Some("2".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(settings.verbosity, 2);
    /// assert_eq!(settings.logfile, None);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLevel`] if a level variable is set but is
    /// not an integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut settings = Self::default();
        if let Some(value) = read(VERBOSITY_ENV) {
            settings.verbosity = parse_level(VERBOSITY_ENV, &value)?;
        }
        if let Some(value) = read(DEBUG_LEVEL_ENV) {
            settings.debug_level = parse_level(DEBUG_LEVEL_ENV, &value)?;
        }
        settings.logfile = read(LOGFILE_ENV).map(PathBuf::from);
        Ok(settings)
    }

    /// Push the settings into `output`.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::LogfileOpen`] if the configured log file cannot
    /// be opened; thresholds are applied regardless.
    pub fn apply(&self, output: &Output) -> Result<(), OutputError> {
        output.set_verbosity(self.verbosity);
        output.set_debug_level(self.debug_level);
        if let Some(path) = &self.logfile {
            output.set_logfile(path)?;
        }
        Ok(())
    }
}

fn parse_level(key: &str, value: &str) -> Result<i32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLevel {
            key: key.to_string(),
            value: value.to_string(),
        })
}
