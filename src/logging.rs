//! Console logging setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The filter used when `RUST_LOG` isn't set.
const DEFAULT_FILTER: &str = "info";

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// # Errors
///
/// Fails if a global subscriber was already installed.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
}
