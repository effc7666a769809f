//! Command: print version information.

/// Version string, preferring the one stamped in by the build script.
#[must_use]
pub fn version() -> &'static str {
    option_env!("DLO_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the version on the normal channel.
pub fn run() {
    crate::output::writeln(format!("dlo {}", version()));
}
