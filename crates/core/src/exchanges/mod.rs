pub mod registry;
pub mod traits;

// Exchange implementations
pub mod binance;
pub mod bitbay;
pub mod bitstamp;
pub mod coinmate;
pub mod kraken;

use serde::Deserialize;

use crate::errors::CoreError;

/// A price as it appears in a ticker payload.
///
/// Exchanges disagree on the wire type: Coinmate sends JSON numbers,
/// Kraken, Bitstamp and Binance send decimal strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RateValue {
    Number(f64),
    Text(String),
}

impl RateValue {
    /// Convert to `f64`, rejecting unparsable, non-finite and negative prices.
    pub fn to_rate(&self, exchange: &str) -> Result<f64, CoreError> {
        let rate = match self {
            RateValue::Number(n) => *n,
            RateValue::Text(s) => s.trim().parse::<f64>().map_err(|e| {
                CoreError::MalformedResponse {
                    exchange: exchange.to_string(),
                    message: format!("Invalid price format '{s}': {e}"),
                }
            })?,
        };
        if !rate.is_finite() || rate < 0.0 {
            return Err(CoreError::MalformedResponse {
                exchange: exchange.to_string(),
                message: format!("Invalid price {rate} (must be finite and non-negative)"),
            });
        }
        Ok(rate)
    }
}

/// Deserialize a typed ticker view out of an already parsed JSON body.
pub(crate) fn decode<'de, T: Deserialize<'de>>(
    exchange: &str,
    data: &'de serde_json::Value,
) -> Result<T, CoreError> {
    T::deserialize(data).map_err(|e| CoreError::MalformedResponse {
        exchange: exchange.to_string(),
        message: format!("Unexpected ticker shape: {e}"),
    })
}

