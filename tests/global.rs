#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::indexing_slicing
)]
//! Integration tests for the free functions and macros that target the
//! process-wide context.
//!
//! Each test takes [`common::lock_global`] and resets the global context
//! before use.

mod common;

use std::sync::MutexGuard;

use dlo::{CaptureSink, Terminated};

struct Captured {
    normal: CaptureSink,
    errors: CaptureSink,
    _lock: MutexGuard<'static, ()>,
}

fn reset() -> Captured {
    let lock = common::lock_global();
    let normal = CaptureSink::new();
    let errors = CaptureSink::new();
    dlo::set_stdout_sink(normal.clone());
    dlo::set_stderr_sink(errors.clone());
    dlo::set_verbosity(0);
    dlo::set_debug_level(0);
    dlo::set_note_prefix(None);
    dlo::set_logfile("").unwrap();
    Captured {
        normal,
        errors,
        _lock: lock,
    }
}

#[test]
fn free_functions_follow_global_thresholds() {
    let cap = reset();
    dlo::set_verbosity(2);
    dlo::note(0, "always");
    dlo::note(3, "hidden");
    dlo::note(1, "shown");
    dlo::warn("careful");
    dlo::error("broken");
    dlo::writeln("plain");
    assert_eq!(cap.normal.lines(), ["always", "NOTE(1): shown", "plain"]);
    assert_eq!(cap.errors.lines(), ["WARNING: careful", "ERROR: broken"]);
}

#[test]
fn formatting_macros_build_the_message() {
    let cap = reset();
    dlo::set_verbosity(1);
    dlo::notef!(1, "{} of {}", 3, 4);
    dlo::warnf!("{:>4}", "x");
    dlo::errorf!("code {code}", code = 7);
    dlo::writefln!("{}", dlo::text!("a", 1, 'b'));
    assert_eq!(cap.normal.lines(), ["NOTE(1): 3 of 4", "a1b"]);
    assert_eq!(cap.errors.lines(), ["WARNING:    x", "ERROR: code 7"]);
}

#[test]
fn debug_macros_capture_the_call_site() {
    let cap = reset();
    dlo::set_debug_level(2);
    let line = line!() + 1;
    dlo::debug!(2, "answer=", 42);
    dlo::debugf!(3, "hidden {}", 1);

    let lines = cap.normal.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0],
        format!(
            "DEBUG(2) [\"{}\", debug_macros_capture_the_call_site (#{line})]: answer=42",
            file!()
        )
    );
}

fn call<T>(f: impl FnOnce() -> T) -> T {
    f()
}

#[test]
fn location_inside_closure_names_enclosing_function() {
    let location = call(|| dlo::location!());
    assert_eq!(location.function, "location_inside_closure_names_enclosing_function");
    assert_eq!(location.file, file!());
}

#[test]
fn global_logfile_round_trip() {
    let cap = reset();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("global.log");
    dlo::set_logfile(&path).unwrap();
    dlo::warn("to file");
    dlo::note(0, "also");
    dlo::set_logfile("").unwrap();
    dlo::warn("console only");

    let records = common::read_records(&path);
    let bodies: Vec<&str> = records
        .iter()
        .map(|r| common::split_timestamp(r).1)
        .collect();
    assert_eq!(bodies, ["WARNING: to file", "also"]);
    assert_eq!(cap.errors.lines().len(), 2);
}

#[test]
fn fatalf_unwinds_to_guard() {
    let cap = reset();
    let result = dlo::guard(|| -> u8 { dlo::fatalf!("giving up after {} tries", 3) });
    assert_eq!(result, Err(Terminated));
    assert_eq!(cap.errors.lines(), ["FATAL: giving up after 3 tries"]);
}

#[test]
fn print_and_log_prefixed_uses_given_channel() {
    let cap = reset();
    dlo::print_and_log_prefixed("-> ", "one\ntwo", dlo::Channel::Error).unwrap();
    dlo::print_and_log("raw", dlo::Channel::Normal).unwrap();
    assert_eq!(cap.errors.lines(), ["-> one\n   two"]);
    assert_eq!(cap.normal.lines(), ["raw"]);
}
