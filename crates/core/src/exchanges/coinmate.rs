use serde::Deserialize;
use serde_json::Value;

use super::traits::{Exchange, PairTable};
use super::{decode, RateValue};
use crate::errors::CoreError;

const BASE_URL: &str = "https://coinmate.io/api/ticker";

/// Coinmate ticker.
///
/// - **Endpoint**: `/api/ticker?currencyPair={CRYPTO}_{FIAT}`
/// - **Rate path**: `.data.ask`
/// - Failures come back as HTTP 200 with `"error": true` and an `errorMessage`.
pub struct CoinmateExchange;

impl CoinmateExchange {
    pub const ID: &'static str = "coinmate-io";
}

static PAIRS: PairTable = &[
    ("BTC", &["CZK", "EUR"]),
    ("ETH", &["CZK", "EUR"]),
    ("LTC", &["CZK", "EUR"]),
    ("XRP", &["CZK", "EUR"]),
    ("DASH", &["CZK", "EUR"]),
    ("BCH", &["CZK", "EUR"]),
];

// ── Coinmate API response types ─────────────────────────────────────

#[derive(Deserialize)]
struct TickerResponse {
    #[serde(default)]
    error: bool,
    #[serde(rename = "errorMessage", default)]
    error_message: Option<String>,
    data: Option<TickerData>,
}

#[derive(Deserialize)]
struct TickerData {
    ask: RateValue,
}

impl Exchange for CoinmateExchange {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Coinmate"
    }

    fn homepage(&self) -> &str {
        "https://coinmate.io"
    }

    fn pairs(&self) -> PairTable {
        PAIRS
    }

    fn request_url(&self, crypto: &str, fiat: &str) -> String {
        format!("{BASE_URL}?currencyPair={crypto}_{fiat}")
    }

    fn extract_rate(&self, data: &Value, crypto: &str, fiat: &str) -> Result<f64, CoreError> {
        let resp: TickerResponse = decode(Self::ID, data)?;
        if resp.error {
            return Err(CoreError::MalformedResponse {
                exchange: Self::ID.into(),
                message: resp
                    .error_message
                    .unwrap_or_else(|| format!("API error for {crypto}_{fiat}")),
            });
        }
        let data = resp.data.ok_or_else(|| CoreError::MalformedResponse {
            exchange: Self::ID.into(),
            message: format!("No ticker data for {crypto}_{fiat}"),
        })?;
        data.ask.to_rate(Self::ID)
    }
}
