//! Leveled console and log-file output.
//!
//! A process-wide, thread-safe facility that routes notes, warnings, errors,
//! debug traces and fatal messages to pluggable sinks and an optional
//! timestamped log file.
//!
//! - **[`output`]**: the [`Output`] context, its sinks, and the free functions
//!   and macros that target the global instance
//! - **[`config`]**: startup settings from the environment
//! - **[`cli`]** and **[`commands`]**: the `dlo` front end
//!
//! ```
//! dlo::set_verbosity(1);
//! dlo::note(1, "shown");
//! dlo::note(2, "suppressed");
//! dlo::warnf!("{} retries left", 3);
//! ```
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{ConfigError, OutputError};
pub use output::{
    CaptureSink, Channel, Location, NotePrefixFn, Output, SharedBuffer, Sink, Stderr, Stdout,
    Terminated, TracingSink, debug, default_note_prefix, error, fatal, get_timestamp, guard,
    init_subscriber, note, prefix_and_align, print_and_log, print_and_log_prefixed,
    set_debug_level, set_logfile, set_logfile_writer, set_note_prefix, set_stderr_sink,
    set_stdout_sink, set_verbosity, swriteln, warn, writeln,
};
