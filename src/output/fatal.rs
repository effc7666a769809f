//! Controlled termination for fatal conditions.
//!
//! [`Output::fatal`](super::Output::fatal) reports the message and then
//! unwinds the stack with a private payload. Because the signal is not a
//! `Result`, ordinary `?` propagation and error matching cannot intercept
//! it; only [`guard`] recognises it and turns it into [`Terminated`].
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use thiserror::Error;

use super::Output;

/// Unwind payload used by the fatal path. Private so that nothing outside
/// this module can fabricate or match on it.
struct FatalSignal;

/// Unwind with the fatal signal. Does not run the panic hook.
pub(super) fn raise() -> ! {
    panic::resume_unwind(Box::new(FatalSignal))
}

/// The process was terminated by a fatal message.
///
/// Returned by [`guard`]; convert it into an [`ExitCode`] to leave `main`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("terminated by a fatal message")]
pub struct Terminated;

impl Terminated {
    /// Exit status reported for a fatal termination.
    pub const EXIT_STATUS: u8 = 1;
}

impl From<Terminated> for ExitCode {
    fn from(_: Terminated) -> Self {
        Self::from(Terminated::EXIT_STATUS)
    }
}

/// Run `f` behind the top-level fatal boundary.
///
/// Returns `Ok` with the closure's value when it completes normally. When a
/// fatal message unwinds out of `f`, flushes the global [`Output`] and returns
/// [`Terminated`]. Any other panic is resumed unchanged.
///
/// # Errors
///
/// Returns [`Terminated`] if `f` raised a fatal message.
///
/// # Examples
///
/// ```
/// use std::process::ExitCode;
///
/// fn main() -> ExitCode {
///     match dlo::guard(|| dlo::writeln("working")) {
///         Ok(()) => ExitCode::SUCCESS,
///         Err(terminated) => terminated.into(),
///     }
/// }
/// ```
pub fn guard<T>(f: impl FnOnce() -> T) -> Result<T, Terminated> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            if payload.is::<FatalSignal>() {
                if let Err(err) = Output::global().flush() {
                    tracing::warn!("flushing output after fatal message failed: {err}");
                }
                Err(Terminated)
            } else {
                panic::resume_unwind(payload)
            }
        }
    }
}
