//! Leveled console and log-file output.
//!
//! Every function here targets the process-wide [`Output::global`] context;
//! the same operations exist as methods on [`Output`] for private contexts.

mod dispatcher;
pub mod fatal;
mod gate;
mod logfile;
mod macros;
mod sink;
mod subscriber;
mod utils;

use std::io::{self, Write};
use std::path::Path;

pub use dispatcher::{Channel, Location, NotePrefixFn, Output, default_note_prefix};
pub use fatal::{Terminated, guard};
pub use sink::{CaptureSink, SharedBuffer, Sink, Stderr, Stdout, TracingSink};
pub use subscriber::init_subscriber;
#[doc(hidden)]
pub use utils::{concat, function_name};
pub use utils::{get_timestamp, prefix_and_align};

use crate::error::OutputError;

/// Set the highest note level that is emitted.
pub fn set_verbosity(level: i32) {
    Output::global().set_verbosity(level);
}

/// Set the highest debug level that is emitted.
pub fn set_debug_level(level: i32) {
    Output::global().set_debug_level(level);
}

/// Log to `path`, or disable file logging if `path` is empty.
///
/// # Errors
///
/// Returns [`OutputError::LogfileOpen`] if `path` cannot be opened for
/// writing; the previous log file stays active.
pub fn set_logfile(path: impl AsRef<Path>) -> Result<(), OutputError> {
    Output::global().set_logfile(path)
}

/// Log to an already-open destination, taking ownership of it.
pub fn set_logfile_writer(writer: impl Write + Send + 'static) {
    Output::global().set_logfile_writer(writer);
}

/// Replace the normal-channel sink.
pub fn set_stdout_sink(sink: impl Sink + 'static) {
    Output::global().set_stdout_sink(sink);
}

/// Replace the error-channel sink.
pub fn set_stderr_sink(sink: impl Sink + 'static) {
    Output::global().set_stderr_sink(sink);
}

/// Replace the note-prefix generator; `None` restores the default.
pub fn set_note_prefix(prefix: Option<NotePrefixFn>) {
    Output::global().set_note_prefix(prefix);
}

/// Dispatch `msg` to a channel and the log file.
///
/// # Errors
///
/// Returns [`OutputError::LogfileWrite`] if the log file rejects the record.
pub fn print_and_log(msg: &str, channel: Channel) -> Result<(), OutputError> {
    Output::global().print_and_log(msg, channel)
}

/// Dispatch `msg` with `prefix` in front of its first line.
///
/// # Errors
///
/// Returns [`OutputError::LogfileWrite`] if the log file rejects the record.
pub fn print_and_log_prefixed(prefix: &str, msg: &str, channel: Channel) -> Result<(), OutputError> {
    Output::global().print_and_log_prefixed(prefix, msg, channel)
}

/// Print a note at `level`.
pub fn note(level: i32, text: impl AsRef<str>) {
    Output::global().note(level, text);
}

/// Print a warning.
pub fn warn(text: impl AsRef<str>) {
    Output::global().warn(text);
}

/// Print an error.
pub fn error(text: impl AsRef<str>) {
    Output::global().error(text);
}

/// Print a debug trace; see the [`debug!`](crate::debug) macro for call-site
/// capture.
pub fn debug(level: i32, location: Location, text: impl AsRef<str>) {
    Output::global().debug(level, location, text);
}

/// Print a line without prefix on the normal channel.
pub fn writeln(text: impl AsRef<str>) {
    Output::global().writeln(text);
}

/// Print a fatal message and unwind to the nearest [`guard`].
pub fn fatal(text: impl AsRef<str>) -> ! {
    Output::global().fatal(text)
}

/// Write a line straight to `stream`, bypassing sinks and the log file.
///
/// # Errors
///
/// Returns any error raised by `stream`.
pub fn swriteln(stream: &mut (impl Write + ?Sized), text: impl AsRef<str>) -> io::Result<()> {
    writeln!(stream, "{}", text.as_ref())
}
