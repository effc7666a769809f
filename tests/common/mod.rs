// Shared helpers for integration tests.
//
// Provides an output context wired to capturing sinks plus a temporary
// directory for log files, so each test can observe exactly what was emitted
// without touching the console or the process-wide context.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use dlo::{CaptureSink, Output};

/// Serializes tests that reconfigure [`Output::global`].
static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

/// Take the lock guarding the process-wide output context.
pub fn lock_global() -> MutexGuard<'static, ()> {
    GLOBAL_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A private output context with capturing sinks, backed by a
/// [`tempfile::TempDir`] for log files.
pub struct TestOutput {
    /// The context under test.
    pub output: Output,
    /// Lines received on the normal channel.
    pub normal: CaptureSink,
    /// Lines received on the error channel.
    pub errors: CaptureSink,
    /// Scratch directory, deleted on drop.
    pub dir: tempfile::TempDir,
}

impl TestOutput {
    /// Create a context with default thresholds and no log file.
    pub fn new() -> Self {
        let normal = CaptureSink::new();
        let errors = CaptureSink::new();
        Self {
            output: Output::with_sinks(normal.clone(), errors.clone()),
            normal,
            errors,
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path of `name` inside the scratch directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Open `name` in the scratch directory as the log file and return its path.
    pub fn with_logfile(self, name: &str) -> (Self, PathBuf) {
        let path = self.path(name);
        self.output.set_logfile(&path).expect("open logfile");
        (self, path)
    }
}

/// Read a log file and split it into records.
pub fn read_records(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read logfile")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Split `record` into its timestamp and the rest, asserting the
/// `[MM/DD/YY HH:MM:SS] ` layout.
pub fn split_timestamp(record: &str) -> (&str, &str) {
    let (stamp, rest) = record
        .strip_prefix('[')
        .and_then(|tail| tail.split_once("] "))
        .unwrap_or_else(|| panic!("record without timestamp: {record:?}"));
    assert_eq!(stamp.len(), 17, "timestamp {stamp:?}");
    for (i, ch) in stamp.chars().enumerate() {
        let expected_sep = match i {
            2 | 5 => Some('/'),
            8 => Some(' '),
            11 | 14 => Some(':'),
            _ => None,
        };
        match expected_sep {
            Some(sep) => assert_eq!(ch, sep, "timestamp {stamp:?}"),
            None => assert!(ch.is_ascii_digit(), "timestamp {stamp:?}"),
        }
    }
    (stamp, rest)
}
