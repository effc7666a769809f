//! Error types for the output facility.
//!
//! Library operations return typed errors built with [`thiserror`]; the `dlo`
//! binary converts them to [`anyhow::Error`] at the command boundary via `?`.
//!
//! Fatal termination is deliberately absent here: it is an unwinding signal
//! (see [`fatal`](crate::output::fatal)), not an error value.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the dispatcher and its setup calls.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The log file could not be opened for writing. The previous logging
    /// configuration stays active.
    #[error("could not open logfile {}: {source}", path.display())]
    LogfileOpen {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing a record to the active log file failed.
    #[error("could not write to logfile: {0}")]
    LogfileWrite(#[source] io::Error),
}

/// Errors raised while assembling [`Settings`](crate::config::Settings).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds a value that is not an integer.
    #[error("invalid value '{value}' for {key}: expected an integer")]
    InvalidLevel {
        /// Name of the variable.
        key: String,
        /// The rejected value.
        value: String,
    },
}
