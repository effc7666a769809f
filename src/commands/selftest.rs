//! Command: run the built-in self checks.
//!
//! Each check drives a private [`Output`] wired to in-memory sinks, so the
//! global context is only used to report results.
use crate::output::{CaptureSink, Output, SharedBuffer, guard};

/// Outcome of a single check.
type CheckResult = Result<(), String>;

/// A named check.
struct Check {
    name: &'static str,
    run: fn() -> CheckResult,
}

const CHECKS: &[Check] = &[
    Check {
        name: "verbosity gate",
        run: verbosity_gate,
    },
    Check {
        name: "debug gate",
        run: debug_gate,
    },
    Check {
        name: "continuation alignment",
        run: continuation_alignment,
    },
    Check {
        name: "log file records",
        run: log_file_records,
    },
    Check {
        name: "fatal guard",
        run: fatal_guard,
    },
];

/// Run every check, reporting each on the normal channel.
///
/// Returns the number of failed checks.
#[must_use]
pub fn run() -> usize {
    let mut failed = 0;
    for check in CHECKS {
        match (check.run)() {
            Ok(()) => crate::writefln!("ok      {}", check.name),
            Err(reason) => {
                failed += 1;
                crate::errorf!("{} failed: {reason}", check.name);
            }
        }
    }
    crate::notef!(1, "{} checks, {failed} failed", CHECKS.len());
    failed
}

fn captured() -> (Output, CaptureSink, CaptureSink) {
    let normal = CaptureSink::new();
    let errors = CaptureSink::new();
    let output = Output::with_sinks(normal.clone(), errors.clone());
    (output, normal, errors)
}

fn expect_lines(what: &str, got: &[String], want: &[&str]) -> CheckResult {
    if got == want {
        Ok(())
    } else {
        Err(format!("{what}: expected {want:?}, got {got:?}"))
    }
}

fn verbosity_gate() -> CheckResult {
    let (output, normal, errors) = captured();
    output.set_verbosity(1);
    output.note(2, "hidden");
    output.note(1, "shown");
    output.warn("always");
    expect_lines("normal", &normal.lines(), &["NOTE(1): shown"])?;
    expect_lines("error", &errors.lines(), &["WARNING: always"])
}

fn debug_gate() -> CheckResult {
    let (output, normal, _) = captured();
    output.set_debug_level(1);
    output.debug(2, crate::location!(), "hidden");
    output.debug(1, crate::location!(), "shown");
    match normal.lines().as_slice() {
        [line]
            if line.starts_with("DEBUG(1) [\"")
                && line.contains(", debug_gate (#")
                && line.ends_with(")]: shown") =>
        {
            Ok(())
        }
        other => Err(format!("expected one tagged debug line, got {other:?}")),
    }
}

fn continuation_alignment() -> CheckResult {
    let (output, _, errors) = captured();
    output.error("first\nsecond");
    expect_lines("error", &errors.lines(), &["ERROR: first\n       second"])
}

fn log_file_records() -> CheckResult {
    let (output, _, _) = captured();
    let buffer = SharedBuffer::new();
    output.set_logfile_writer(buffer.clone());
    output.warn("one");
    output.note(5, "gated");
    output.writeln("two");
    let contents = buffer.contents();
    let records: Vec<&str> = contents.lines().collect();
    if records.len() != 2 {
        return Err(format!("expected 2 records, got {records:?}"));
    }
    for (record, tail) in records.iter().zip(["] WARNING: one", "] two"]) {
        if !record.starts_with('[') || !record.ends_with(tail) {
            return Err(format!("malformed record {record:?}"));
        }
    }
    Ok(())
}

fn fatal_guard() -> CheckResult {
    let (output, _, errors) = captured();
    let result: Result<(), _> = guard(|| output.fatal("stop"));
    if result.is_ok() {
        return Err("fatal returned normally".to_string());
    }
    expect_lines("error", &errors.lines(), &["FATAL: stop"])
}
