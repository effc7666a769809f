//! Line sinks: the destinations of the normal and error channels.
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A destination for fully formatted lines.
///
/// The dispatcher hands over each line without a trailing newline; the sink
/// terminates the line itself. Sinks are invoked while the dispatcher's write
/// lock is held, so a sink must not call back into the same
/// [`Output`](super::Output).
///
/// Any `Fn(&str) + Send + Sync` closure is a sink.
#[cfg_attr(test, mockall::automock)]
pub trait Sink: Send + Sync {
    /// Write one line (which may contain embedded line breaks).
    fn write_line(&self, text: &str);

    /// Flush buffered output, if any.
    fn flush(&self) {}
}

impl<F> Sink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn write_line(&self, text: &str) {
        self(text);
    }
}

/// Default normal-channel sink: standard output.
///
/// Writes are best-effort; a failing console does not interrupt the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn write_line(&self, text: &str) {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}").ok();
    }

    fn flush(&self) {
        io::stdout().flush().ok();
    }
}

/// Default error-channel sink: standard error.
///
/// Writes are best-effort; a failing console does not interrupt the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Sink for Stderr {
    fn write_line(&self, text: &str) {
        let mut err = io::stderr().lock();
        writeln!(err, "{text}").ok();
    }

    fn flush(&self) {
        io::stderr().flush().ok();
    }
}

/// In-memory sink collecting every line it receives.
///
/// Clones share the same buffer, so one clone can be installed as a sink
/// while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of all captured lines in arrival order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Sink for CaptureSink {
    fn write_line(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
    }
}

/// Sink that forwards each line as a [`tracing`] event at a fixed level,
/// bridging the facility into an application's subscriber.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Create a sink that emits events at `level` with target `dlo::sink`.
    #[must_use]
    pub const fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl Sink for TracingSink {
    fn write_line(&self, text: &str) {
        let level = self.level;
        if level == tracing::Level::ERROR {
            tracing::error!(target: "dlo::sink", "{text}");
        } else if level == tracing::Level::WARN {
            tracing::warn!(target: "dlo::sink", "{text}");
        } else if level == tracing::Level::INFO {
            tracing::info!(target: "dlo::sink", "{text}");
        } else if level == tracing::Level::DEBUG {
            tracing::debug!(target: "dlo::sink", "{text}");
        } else {
            tracing::trace!(target: "dlo::sink", "{text}");
        }
    }
}

/// Shared in-memory byte buffer usable as a log-file writer.
///
/// Clones share the same buffer: install one with
/// [`Output::set_logfile_writer`](super::Output::set_logfile_writer) and read
/// the records back through another.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the buffer contents decoded as UTF-8 (lossily).
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap_or_else(PoisonError::into_inner))
            .into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
