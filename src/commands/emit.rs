//! Commands that emit a single message.
use crate::cli::Command;
use crate::output::Output;

/// Emit the message carried by `command` through the global output context.
/// A `fatal` command does not return.
pub fn run(command: &Command) {
    run_on(Output::global(), command);
}

/// Emit the message carried by `command` through `output`.
pub fn run_on(output: &Output, command: &Command) {
    match command {
        Command::Note(opts) => output.note(opts.level, opts.text()),
        Command::Warn(opts) => output.warn(opts.text()),
        Command::Error(opts) => output.error(opts.text()),
        Command::Debug(opts) => output.debug(opts.level, crate::location!(), opts.text()),
        Command::Fatal(opts) => output.fatal(opts.text()),
        Command::Selftest | Command::Version => {
            tracing::debug!(?command, "not a message command");
        }
    }
}
