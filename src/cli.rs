//! Command-line interface of the `dlo` binary.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Settings;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "dlo",
    about = "Leveled console and log-file output",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands. Each one overrides the matching
/// `DLO_*` environment variable.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Highest note level that is printed
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub verbosity: Option<i32>,

    /// Highest debug level that is printed
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub debug_level: Option<i32>,

    /// Write a timestamped copy of all output to this file
    #[arg(short, long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Write the log file to the cache directory ($XDG_CACHE_HOME/dlo/dlo.log)
    #[arg(long, global = true, conflicts_with = "logfile")]
    pub log_to_cache: bool,
}

impl GlobalOpts {
    /// Override `settings` with every option given on the command line.
    ///
    /// `cache_log` supplies the log path for `--log-to-cache`; it is only
    /// called when that flag is set.
    pub fn overlay(&self, settings: &mut Settings, cache_log: impl FnOnce() -> Option<PathBuf>) {
        if let Some(level) = self.verbosity {
            settings.verbosity = level;
        }
        if let Some(level) = self.debug_level {
            settings.debug_level = level;
        }
        if let Some(path) = &self.logfile {
            settings.logfile = Some(path.clone());
        } else if self.log_to_cache
            && let Some(path) = cache_log()
        {
            settings.logfile = Some(path);
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a note at a verbosity level
    Note(LeveledOpts),
    /// Print a warning
    Warn(MessageOpts),
    /// Print an error
    Error(MessageOpts),
    /// Print a debug trace at a debug level
    Debug(LeveledOpts),
    /// Print a fatal message and exit with status 1
    Fatal(MessageOpts),
    /// Run the built-in self checks
    Selftest,
    /// Print version information
    Version,
}

/// Options for unleveled messages.
#[derive(Args, Debug, Clone)]
pub struct MessageOpts {
    /// Message words, joined by single spaces
    #[arg(required = true)]
    pub words: Vec<String>,
}

impl MessageOpts {
    /// The message text.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Options for leveled messages.
#[derive(Args, Debug, Clone)]
pub struct LeveledOpts {
    /// Level of the message
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub level: i32,

    /// Message words, joined by single spaces
    #[arg(required = true)]
    pub words: Vec<String>,
}

impl LeveledOpts {
    /// The message text.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_note_with_level() {
        let cli = Cli::parse_from(["dlo", "note", "--level", "2", "hello", "world"]);
        let Command::Note(opts) = cli.command else {
            panic!("expected note command");
        };
        assert_eq!(opts.level, 2);
        assert_eq!(opts.text(), "hello world");
    }

    #[test]
    fn parse_negative_verbosity() {
        let cli = Cli::parse_from(["dlo", "--verbosity", "-1", "warn", "x"]);
        assert_eq!(cli.global.verbosity, Some(-1));
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["dlo", "error", "bad", "-l", "/tmp/x.log", "-d", "3"]);
        assert_eq!(cli.global.logfile, Some(PathBuf::from("/tmp/x.log")));
        assert_eq!(cli.global.debug_level, Some(3));
        assert!(matches!(cli.command, Command::Error(_)));
    }

    #[test]
    fn message_is_required() {
        assert!(Cli::try_parse_from(["dlo", "warn"]).is_err());
    }

    #[test]
    fn log_to_cache_conflicts_with_logfile() {
        assert!(Cli::try_parse_from(["dlo", "--log-to-cache", "-l", "x.log", "version"]).is_err());
    }

    #[test]
    fn parse_selftest_and_version() {
        assert!(matches!(
            Cli::parse_from(["dlo", "selftest"]).command,
            Command::Selftest
        ));
        assert!(matches!(
            Cli::parse_from(["dlo", "version"]).command,
            Command::Version
        ));
    }

    #[test]
    fn overlay_prefers_flags() {
        let mut settings = Settings {
            verbosity: 1,
            debug_level: 1,
            logfile: Some(PathBuf::from("env.log")),
        };
        let opts = GlobalOpts {
            verbosity: Some(5),
            logfile: Some(PathBuf::from("flag.log")),
            ..GlobalOpts::default()
        };
        opts.overlay(&mut settings, || None);
        assert_eq!(settings.verbosity, 5);
        assert_eq!(settings.debug_level, 1, "unset flag keeps env value");
        assert_eq!(settings.logfile, Some(PathBuf::from("flag.log")));
    }

    #[test]
    fn overlay_uses_cache_log_only_when_asked() {
        let mut settings = Settings::default();
        GlobalOpts::default().overlay(&mut settings, || Some(PathBuf::from("cache.log")));
        assert_eq!(settings.logfile, None);

        let opts = GlobalOpts {
            log_to_cache: true,
            ..GlobalOpts::default()
        };
        opts.overlay(&mut settings, || Some(PathBuf::from("cache.log")));
        assert_eq!(settings.logfile, Some(PathBuf::from("cache.log")));
    }
}
