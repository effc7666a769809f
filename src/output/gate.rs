//! Verbosity and debug thresholds.
use std::sync::atomic::{AtomicI32, Ordering};

/// Two independent thresholds deciding which leveled messages are emitted.
///
/// Both are read on every leveled call, including the ones that end up
/// suppressed, so they are plain atomics rather than lock-guarded values.
#[derive(Debug, Default)]
pub(super) struct LevelGate {
    verbosity: AtomicI32,
    debug: AtomicI32,
}

impl LevelGate {
    pub(super) fn set_verbosity(&self, level: i32) {
        self.verbosity.store(level, Ordering::Relaxed);
    }

    pub(super) fn verbosity(&self) -> i32 {
        self.verbosity.load(Ordering::Relaxed)
    }

    pub(super) fn set_debug_level(&self, level: i32) {
        self.debug.store(level, Ordering::Relaxed);
    }

    pub(super) fn debug_level(&self) -> i32 {
        self.debug.load(Ordering::Relaxed)
    }

    /// A note at `level` passes iff `level <= verbosity`.
    pub(super) fn allows_note(&self, level: i32) -> bool {
        level <= self.verbosity()
    }

    /// A debug trace at `level` passes iff `level <= debug level`.
    pub(super) fn allows_debug(&self, level: i32) -> bool {
        level <= self.debug_level()
    }
}
