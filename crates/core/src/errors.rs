use thiserror::Error;

/// Unified error type for the entire crypto-ticker-core library.
/// Every public function returns `Result<T, CoreError>`.
///
/// Errors fall into two tiers. Lookup errors (unknown exchange, unknown
/// currency) are hard failures and always reach the caller. Transport and
/// payload errors are soft: the callback-based API logs and absorbs them,
/// the future-based API hands them back typed. See [`CoreError::is_soft`].
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Registry / Catalog ──────────────────────────────────────────
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown crypto asset: {0}")]
    UnknownCrypto(String),

    #[error("Exchange already registered: {0}")]
    DuplicateExchange(String),

    #[error("Exchange {exchange} lists {crypto} with no fiat pairs")]
    EmptyPairList { exchange: String, crypto: String },

    #[error("Exchange {exchange} lists {entry} more than once")]
    DuplicatePairEntry { exchange: String, entry: String },

    #[error("Pair {crypto}/{fiat} is not supported on {exchange}")]
    UnsupportedPair {
        exchange: String,
        crypto: String,
        fiat: String,
    },

    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error ({exchange}): {message}")]
    Network { exchange: String, message: String },

    #[error("Empty response from {exchange}")]
    EmptyResponse { exchange: String },

    #[error("Malformed response from {exchange}: {message}")]
    MalformedResponse { exchange: String, message: String },

    #[error("Request to {exchange} timed out after {after_secs}s")]
    Timeout { exchange: String, after_secs: u64 },

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("No Tokio runtime on the calling thread: {0}")]
    NoRuntime(String),
}

impl CoreError {
    /// True for transport/payload failures that the widget absorbs silently
    /// (keeps showing the last known rate). False for lookup errors that point
    /// at a configuration or programming mistake.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            CoreError::Network { .. }
                | CoreError::EmptyResponse { .. }
                | CoreError::MalformedResponse { .. }
                | CoreError::Timeout { .. }
        )
    }

    /// Attach the exchange id to a transport error raised without one.
    pub(crate) fn for_exchange(self, exchange: &str) -> Self {
        match self {
            CoreError::Network { exchange: e, message } if e.is_empty() => CoreError::Network {
                exchange: exchange.to_string(),
                message,
            },
            CoreError::MalformedResponse { exchange: e, message } if e.is_empty() => {
                CoreError::MalformedResponse {
                    exchange: exchange.to_string(),
                    message,
                }
            }
            other => other,
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::MalformedResponse {
            exchange: String::new(),
            message: e.to_string(),
        }
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::Network {
            exchange: String::new(),
            message: e.to_string(),
        }
    }
}
