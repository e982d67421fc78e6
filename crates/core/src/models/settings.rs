use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::errors::CoreError;

/// Default per-request timeout for exchange API calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Runtime settings handed over by the host widget.
///
/// The host owns persistence; this struct only describes what it passes in.
/// Every field has a default, so an empty JSON object `{}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerSettings {
    /// Upper bound on a single rate request (connect + body), in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent to exchange APIs.
    pub user_agent: String,

    /// Diagnostic logging options.
    pub log: LogSettings,
}

impl Default for TickerSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("crypto-ticker/{}", env!("CARGO_PKG_VERSION")),
            log: LogSettings::default(),
        }
    }
}

impl TickerSettings {
    /// Parse settings from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| CoreError::Settings(e.to_string()))?;
        if settings.timeout_secs == 0 {
            return Err(CoreError::Settings("timeout_secs must be greater than 0".into()));
        }
        Ok(settings)
    }

    /// Per-request timeout. A zero `timeout_secs` falls back to the default.
    pub fn request_timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            warn!(default = DEFAULT_TIMEOUT_SECS, "timeout_secs is 0, using default");
            return Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        }
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set (e.g., "info", "crypto_ticker_core=debug").
    pub level: String,

    /// Include the event target (module path) in formatted output.
    pub with_target: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}
