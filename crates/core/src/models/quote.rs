use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single successfully fetched rate.
///
/// `rate` is the exchange's current ask price for one unit of `crypto`
/// in `fiat`. Always finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub exchange: String,
    pub crypto: String,
    pub fiat: String,
    pub rate: f64,
    pub fetched_at: DateTime<Utc>,
}

impl RateQuote {
    pub fn new(exchange: &str, crypto: &str, fiat: &str, rate: f64) -> Self {
        Self {
            exchange: exchange.to_string(),
            crypto: crypto.to_string(),
            fiat: fiat.to_string(),
            rate,
            fetched_at: Utc::now(),
        }
    }
}
