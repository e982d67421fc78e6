use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::errors::CoreError;
use crate::models::settings::LogSettings;

/// Install a global `tracing` subscriber writing formatted events to stderr.
///
/// `RUST_LOG` takes precedence over `settings.level`. Hosts that already
/// install their own subscriber should simply not call this; calling it
/// twice returns an error rather than panicking.
pub fn init_logging(settings: &LogSettings) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| CoreError::Settings(format!("Invalid log level '{}': {e}", settings.level)))?;

    let layer = fmt::layer()
        .with_target(settings.with_target)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| CoreError::Settings(format!("Logging already initialised: {e}")))
}
