//! Subcommand implementations and the shared startup sequence.
pub mod emit;
pub mod selftest;
pub mod version;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::{Settings, paths};
use crate::output::Output;

/// Application name used for cache paths.
pub const APP_NAME: &str = "dlo";

/// Resolve settings from the environment and the command line, and apply them
/// to the global output context.
///
/// # Errors
///
/// Returns an error if a level variable is malformed or the log file cannot be
/// opened.
pub fn setup(global: &GlobalOpts) -> Result<Settings> {
    let mut settings = Settings::from_env().context("reading environment")?;
    global.overlay(&mut settings, || paths::log_file_path(APP_NAME));
    if global.log_to_cache && settings.logfile.is_none() {
        tracing::warn!("no cache directory available; file logging stays off");
    }

    tracing::debug!(
        verbosity = settings.verbosity,
        debug_level = settings.debug_level,
        logfile = ?settings.logfile,
        "applying settings"
    );
    settings
        .apply(Output::global())
        .context("configuring output")?;
    Ok(settings)
}
