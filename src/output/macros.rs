//! Macro front ends for the leveled operations.
//!
//! The `*f!` macros build the message from a `format!` template; [`text!`]
//! and [`debug!`] concatenate any number of `Display` values instead.

/// Concatenate any number of `Display` values into a `String`.
///
/// ```
/// assert_eq!(dlo::text!("x=", 4, ", y=", 2.5), "x=4, y=2.5");
/// ```
#[macro_export]
macro_rules! text {
    ($($part:expr),* $(,)?) => {
        $crate::output::concat(&[$(&$part as &dyn ::core::fmt::Display),*])
    };
}

/// Capture the call site as a [`Location`](crate::Location).
///
/// ```
/// fn load() -> dlo::Location {
///     dlo::location!()
/// }
/// assert_eq!(load().function, "load");
/// ```
#[macro_export]
macro_rules! location {
    () => {{
        fn __dlo_marker() {}
        $crate::Location {
            file: file!(),
            function: $crate::output::function_name(&__dlo_marker),
            line: line!(),
        }
    }};
}

/// Print a debug trace built from concatenated `Display` values, tagged with
/// the call site.
///
/// ```
/// dlo::debug!(3, "cache size: ", 128);
/// ```
#[macro_export]
macro_rules! debug {
    ($level:expr, $($part:expr),+ $(,)?) => {
        $crate::output::debug($level, $crate::location!(), $crate::text!($($part),+))
    };
}

/// Print a debug trace from a `format!` template, tagged with the call site.
///
/// ```
/// let hits = 3;
/// dlo::debugf!(2, "{hits} cache hits");
/// ```
#[macro_export]
macro_rules! debugf {
    ($level:expr, $($arg:tt)+) => {
        $crate::output::debug($level, $crate::location!(), format!($($arg)+))
    };
}

/// Print a note at a level from a `format!` template.
///
/// ```
/// dlo::notef!(1, "loaded {} entries", 12);
/// ```
#[macro_export]
macro_rules! notef {
    ($level:expr, $($arg:tt)+) => {
        $crate::output::note($level, format!($($arg)+))
    };
}

/// Print a warning from a `format!` template.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::output::warn(format!($($arg)+))
    };
}

/// Print an error from a `format!` template.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::output::error(format!($($arg)+))
    };
}

/// Print a fatal message from a `format!` template and unwind to the nearest
/// [`guard`](crate::guard).
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::output::fatal(format!($($arg)+))
    };
}

/// Print an unprefixed line from a `format!` template.
#[macro_export]
macro_rules! writefln {
    ($($arg:tt)+) => {
        $crate::output::writeln(format!($($arg)+))
    };
}

/// Write a line from a `format!` template straight to a stream; not logged.
///
/// Evaluates to the `io::Result<()>` of the write.
///
/// ```
/// let mut buf = Vec::new();
/// dlo::swritefln!(&mut buf, "{}-{}", 1, 2).unwrap();
/// assert_eq!(buf, b"1-2\n");
/// ```
#[macro_export]
macro_rules! swritefln {
    ($stream:expr, $($arg:tt)+) => {
        $crate::output::swriteln($stream, format!($($arg)+))
    };
}
