//! Tracing subscriber for the crate's own diagnostics.
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Environment variable holding the filter directives for internal diagnostics.
const LOG_ENV: &str = "DLO_LOG";

/// Install the global [`tracing`] subscriber for internal diagnostics.
///
/// Events go to stderr and are filtered by `$DLO_LOG` (e.g. `dlo=debug`);
/// without it everything is off, so diagnostics never mix with facility
/// output unless requested. Does nothing if a subscriber is already set.
pub fn init_subscriber() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).try_init().ok();
}
