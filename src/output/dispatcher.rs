//! The output context: thresholds, sinks, log file and the dispatcher that
//! serializes writes to them.
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use super::fatal;
use super::gate::LevelGate;
use super::logfile::LogFile;
use super::sink::{Sink, Stderr, Stdout};
use super::utils::{get_timestamp, prefix_and_align};
use crate::error::OutputError;

/// Generator for the prefix of a note at a given level.
///
/// The generator runs while the prefix lock is held, so it must not call back
/// into the same [`Output`].
pub type NotePrefixFn = Box<dyn Fn(i32) -> String + Send + Sync>;

/// Which sink a dispatched message goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Regular output (`note`, `debug`, `writeln`).
    Normal,
    /// Diagnostics (`warn`, `error`, `fatal`).
    Error,
}

/// Call-site information attached to debug traces.
///
/// Usually built with the [`location!`](crate::location) macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Source file, as reported by `file!()`.
    pub file: &'static str,
    /// Name of the enclosing function.
    pub function: &'static str,
    /// Line number, as reported by `line!()`.
    pub line: u32,
}

/// Default note prefix: nothing for level 0, `NOTE(<level>): ` otherwise.
#[must_use]
pub fn default_note_prefix(level: i32) -> String {
    if level == 0 {
        String::new()
    } else {
        format!("NOTE({level}): ")
    }
}

/// Everything the write lock protects.
struct Writers {
    normal: Box<dyn Sink>,
    error: Box<dyn Sink>,
    logfile: Option<LogFile>,
}

static GLOBAL: LazyLock<Output> = LazyLock::new(Output::new);

/// Leveled output context.
///
/// Owns the verbosity and debug thresholds, the normal and error sinks, the
/// optional log file and the note-prefix generator. All methods take `&self`
/// and are safe to call from many threads:
///
/// - thresholds are atomics and never block;
/// - one write lock serializes every dispatch, covering both the sink call and
///   the log-file record, so concurrent messages never tear;
/// - the note-prefix generator sits behind its own lock.
///
/// The process-wide instance used by the free functions and macros is
/// [`Output::global`]; private instances are handy for tests and embedding.
pub struct Output {
    gate: LevelGate,
    writers: Mutex<Writers>,
    note_prefix: Mutex<NotePrefixFn>,
}

impl Output {
    /// Create a context with default thresholds, console sinks and no log file.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sinks(Stdout, Stderr)
    }

    /// Create a context with the given normal and error sinks.
    #[must_use]
    pub fn with_sinks(normal: impl Sink + 'static, error: impl Sink + 'static) -> Self {
        Self {
            gate: LevelGate::default(),
            writers: Mutex::new(Writers {
                normal: Box::new(normal),
                error: Box::new(error),
                logfile: None,
            }),
            note_prefix: Mutex::new(Box::new(default_note_prefix) as NotePrefixFn),
        }
    }

    /// The process-wide context, created on first use with defaults.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    fn lock_writers(&self) -> MutexGuard<'_, Writers> {
        self.writers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -----------------------------------------------------------------------
    // Level gate
    // -----------------------------------------------------------------------

    /// Set the highest note level that is emitted.
    pub fn set_verbosity(&self, level: i32) {
        self.gate.set_verbosity(level);
    }

    /// Current verbosity threshold.
    #[must_use]
    pub fn verbosity(&self) -> i32 {
        self.gate.verbosity()
    }

    /// Set the highest debug level that is emitted.
    pub fn set_debug_level(&self, level: i32) {
        self.gate.set_debug_level(level);
    }

    /// Current debug threshold.
    #[must_use]
    pub fn debug_level(&self) -> i32 {
        self.gate.debug_level()
    }

    // -----------------------------------------------------------------------
    // Sink registry
    // -----------------------------------------------------------------------

    /// Replace the normal-channel sink. Pass [`Stdout`] to restore the default.
    pub fn set_stdout_sink(&self, sink: impl Sink + 'static) {
        let old = std::mem::replace(&mut self.lock_writers().normal, Box::new(sink));
        drop(old);
    }

    /// Replace the error-channel sink. Pass [`Stderr`] to restore the default.
    pub fn set_stderr_sink(&self, sink: impl Sink + 'static) {
        let old = std::mem::replace(&mut self.lock_writers().error, Box::new(sink));
        drop(old);
    }

    /// Replace the note-prefix generator; `None` restores
    /// [`default_note_prefix`].
    pub fn set_note_prefix(&self, prefix: Option<NotePrefixFn>) {
        let prefix: NotePrefixFn = match prefix {
            Some(generate) => generate,
            None => Box::new(default_note_prefix),
        };
        *self
            .note_prefix
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = prefix;
    }

    /// Prefix the active generator produces for a note at `level`.
    #[must_use]
    pub fn note_prefix(&self, level: i32) -> String {
        let generate = self
            .note_prefix
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        (*generate)(level)
    }

    /// Log to `path` from now on, or disable file logging if `path` is empty.
    ///
    /// The file is created or truncated. The previous handle is released only
    /// after the new one is in place.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::LogfileOpen`] if `path` cannot be opened for
    /// writing; the previous log file stays active in that case.
    pub fn set_logfile(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        let path = path.as_ref();
        let new = if path.as_os_str().is_empty() {
            None
        } else {
            match LogFile::create(path) {
                Ok(file) => Some(file),
                Err(err) => {
                    tracing::warn!("{err}");
                    return Err(err);
                }
            }
        };
        let old = std::mem::replace(&mut self.lock_writers().logfile, new);
        tracing::debug!(
            path = %path.display(),
            replaced = old.is_some(),
            "logfile changed"
        );
        drop(old);
        Ok(())
    }

    /// Log to an already-open destination from now on, taking ownership.
    pub fn set_logfile_writer(&self, writer: impl Write + Send + 'static) {
        let old = self
            .lock_writers()
            .logfile
            .replace(LogFile::from_writer(writer));
        tracing::debug!(replaced = old.is_some(), "logging to caller-supplied writer");
        drop(old);
    }

    /// Whether a log file is currently attached.
    #[must_use]
    pub fn has_logfile(&self) -> bool {
        self.lock_writers().logfile.is_some()
    }

    /// Flush both sinks and the log file.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::LogfileWrite`] if flushing the log file fails.
    pub fn flush(&self) -> Result<(), OutputError> {
        let mut writers = self.lock_writers();
        writers.normal.flush();
        writers.error.flush();
        if let Some(file) = writers.logfile.as_mut() {
            file.flush().map_err(OutputError::LogfileWrite)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Dispatcher
    // -----------------------------------------------------------------------

    /// Write `msg` to the sink of `channel` and, if a log file is attached,
    /// append a `[<timestamp>] `-prefixed record to it.
    ///
    /// Both writes happen under the same lock, so the console line and the
    /// file record of one call are never interleaved with another call's.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::LogfileWrite`] if the log file rejects the
    /// record. Console writes are best-effort and never fail.
    pub fn print_and_log(&self, msg: &str, channel: Channel) -> Result<(), OutputError> {
        let record = prefix_and_align(&format!("[{}] ", get_timestamp()), msg) + "\n";

        let mut writers = self.lock_writers();
        match channel {
            Channel::Normal => writers.normal.write_line(msg),
            Channel::Error => writers.error.write_line(msg),
        }
        if let Some(file) = writers.logfile.as_mut() {
            file.write_record(&record)
                .map_err(OutputError::LogfileWrite)?;
        }
        Ok(())
    }

    /// Like [`print_and_log`](Self::print_and_log), with `prefix` in front of
    /// the first line and all further lines aligned under it.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::LogfileWrite`] if the log file rejects the
    /// record.
    pub fn print_and_log_prefixed(
        &self,
        prefix: &str,
        msg: &str,
        channel: Channel,
    ) -> Result<(), OutputError> {
        self.print_and_log(&prefix_and_align(prefix, msg), channel)
    }

    /// Dispatch, turning a log-file failure into an unwinding hard failure.
    fn dispatch(&self, prefix: &str, msg: &str, channel: Channel) {
        if let Err(err) = self.print_and_log_prefixed(prefix, msg, channel) {
            std::panic::panic_any(err);
        }
    }

    // -----------------------------------------------------------------------
    // Leveled operations
    // -----------------------------------------------------------------------

    /// Print a note if `level` does not exceed the verbosity threshold.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`OutputError`] payload if the log file write fails.
    pub fn note(&self, level: i32, text: impl AsRef<str>) {
        if self.gate.allows_note(level) {
            let prefix = self.note_prefix(level);
            self.dispatch(&prefix, text.as_ref(), Channel::Normal);
        }
    }

    /// Print a warning on the error channel.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`OutputError`] payload if the log file write fails.
    pub fn warn(&self, text: impl AsRef<str>) {
        self.dispatch("WARNING: ", text.as_ref(), Channel::Error);
    }

    /// Print an error on the error channel.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`OutputError`] payload if the log file write fails.
    pub fn error(&self, text: impl AsRef<str>) {
        self.dispatch("ERROR: ", text.as_ref(), Channel::Error);
    }

    /// Print a debug trace tagged with its call site if `level` does not
    /// exceed the debug threshold.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`OutputError`] payload if the log file write fails.
    pub fn debug(&self, level: i32, location: Location, text: impl AsRef<str>) {
        if self.gate.allows_debug(level) {
            let prefix = format!(
                "DEBUG({level}) [\"{}\", {} (#{})]: ",
                location.file, location.function, location.line
            );
            self.dispatch(&prefix, text.as_ref(), Channel::Normal);
        }
    }

    /// Print a line on the normal channel without any prefix.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`OutputError`] payload if the log file write fails.
    pub fn writeln(&self, text: impl AsRef<str>) {
        self.dispatch("", text.as_ref(), Channel::Normal);
    }

    /// Print a fatal message on the error channel, then unwind to the nearest
    /// [`guard`](super::fatal::guard). Never returns.
    pub fn fatal(&self, text: impl AsRef<str>) -> ! {
        self.dispatch("FATAL: ", text.as_ref(), Channel::Error);
        fatal::raise()
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("gate", &self.gate)
            .field("logfile", &self.lock_writers().logfile)
            .finish_non_exhaustive()
    }
}
