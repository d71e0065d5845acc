//! Tracing setup. Logs go to stderr so the entry point owns stdout.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Filter used when `RUST_LOG` is unset: quiet unless something is off.
const DEFAULT_FILTER: &str = "porter=warn";

/// Initialize tracing. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
