//! `dlo` command-line front end.
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dlo::cli::{Cli, Command};
use dlo::commands::{self, emit, selftest, version};

fn main() -> ExitCode {
    dlo::init_subscriber();
    let args = Cli::parse();

    match dlo::guard(|| run(&args)) {
        Ok(Ok(code)) => code,
        Ok(Err(err)) => {
            dlo::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
        Err(terminated) => terminated.into(),
    }
}

fn run(args: &Cli) -> Result<ExitCode> {
    commands::setup(&args.global)?;

    match &args.command {
        Command::Version => version::run(),
        Command::Selftest => {
            if selftest::run() > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        command => emit::run(command),
    }

    dlo::Output::global().flush()?;
    Ok(ExitCode::SUCCESS)
}
