//! Text helpers for rendering records: prefix alignment and timestamps.
use std::fmt::{Display, Write as _};

/// Prepend `prefix` to the first line of `text` and indent every following
/// line by the width of the prefix, so that multi-line messages stay aligned
/// under it.
///
/// Width is measured in `char`s. Empty continuation lines are left empty and a
/// trailing newline does not produce an indented blank line.
///
/// # Examples
///
/// ```
/// use dlo::prefix_and_align;
///
/// assert_eq!(prefix_and_align("ERROR: ", "a\nb"), "ERROR: a\n       b");
/// assert_eq!(prefix_and_align("", "a\nb"), "a\nb");
/// ```
#[must_use]
pub fn prefix_and_align(prefix: &str, text: &str) -> String {
    let pad = " ".repeat(prefix.chars().count());
    let mut out = String::with_capacity(prefix.len() + text.len());
    out.push_str(prefix);

    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
    }
    out
}

/// Format the current local time as `MM/DD/YY HH:MM:SS`.
#[must_use]
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%m/%d/%y %H:%M:%S").to_string()
}

/// Concatenate `Display` values; backs the [`text!`](crate::text) macro.
#[doc(hidden)]
#[must_use]
pub fn concat(parts: &[&dyn Display]) -> String {
    let mut out = String::new();
    for part in parts {
        write!(out, "{part}").ok();
    }
    out
}

/// Extract the enclosing function name from the type name of a marker
/// function declared inside it; backs the [`location!`](crate::location) macro.
#[doc(hidden)]
#[must_use]
pub fn function_name<T: ?Sized>(_marker: &T) -> &'static str {
    let full = std::any::type_name::<T>();
    let mut name = full.strip_suffix("::__dlo_marker").unwrap_or(full);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}
