//! The optional log-file destination.
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::OutputError;

/// An owned log destination receiving one timestamped record per dispatch.
///
/// Records are flushed as they are written so that a reader never observes a
/// partial line. Dropping the handle flushes and closes it.
pub(super) struct LogFile {
    writer: Box<dyn Write + Send>,
    path: Option<PathBuf>,
}

impl LogFile {
    /// Create (or truncate) `path` for writing.
    pub(super) fn create(path: &Path) -> Result<Self, OutputError> {
        let file = File::create(path).map_err(|source| OutputError::LogfileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            writer: Box::new(file),
            path: Some(path.to_path_buf()),
        })
    }

    /// Take ownership of an already-open destination.
    pub(super) fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            path: None,
        }
    }

    /// Path the handle was opened from, if it came from the filesystem.
    pub(super) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write a complete record and flush it.
    pub(super) fn write_record(&mut self, record: &str) -> io::Result<()> {
        self.writer.write_all(record.as_bytes())?;
        self.writer.flush()
    }

    pub(super) fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for LogFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFile")
            .field("path", &self.path())
            .finish_non_exhaustive()
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        self.writer.flush().ok();
    }
}
