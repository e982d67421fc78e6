use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use super::traits::{Exchange, PairTable};
use super::{decode, RateValue};
use crate::errors::CoreError;

const BASE_URL: &str = "https://api.kraken.com/0/public/Ticker";

/// Kraken public ticker.
///
/// The request takes plain codes (`pair=BTCUSD`) but the response is keyed
/// by Kraken's own asset names: `X` + crypto + `Z` + fiat, with BTC spelled
/// XBT. So `BTC/USD` comes back under `XXBTZUSD`.
pub struct KrakenExchange;

impl KrakenExchange {
    pub const ID: &'static str = "kraken-com";

    /// Kraken's name for a crypto asset.
    pub fn asset_code(crypto: &str) -> &str {
        match crypto {
            "BTC" => "XBT",
            other => other,
        }
    }

    /// Key under `result` holding the ticker for a pair.
    pub fn result_key(crypto: &str, fiat: &str) -> String {
        format!("X{}Z{fiat}", Self::asset_code(crypto))
    }
}

static PAIRS: PairTable = &[
    ("BTC", &["USD", "EUR", "GBP", "JPY"]),
    ("ETH", &["USD", "EUR", "GBP", "JPY"]),
    ("LTC", &["USD", "EUR", "JPY"]),
    ("XRP", &["USD", "EUR", "JPY"]),
    ("ZEC", &["USD", "EUR"]),
];

// ── Kraken API response types ───────────────────────────────────────

#[derive(Deserialize)]
struct TickerResponse {
    #[serde(default)]
    error: Vec<String>,
    #[serde(default)]
    result: HashMap<String, PairTicker>,
}

#[derive(Deserialize)]
struct PairTicker {
    /// Ask array: [price, whole lot volume, lot volume]
    a: Vec<RateValue>,
}

impl Exchange for KrakenExchange {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Kraken"
    }

    fn homepage(&self) -> &str {
        "https://www.kraken.com"
    }

    fn pairs(&self) -> PairTable {
        PAIRS
    }

    fn request_url(&self, crypto: &str, fiat: &str) -> String {
        format!("{BASE_URL}?pair={crypto}{fiat}")
    }

    fn extract_rate(&self, data: &Value, crypto: &str, fiat: &str) -> Result<f64, CoreError> {
        let resp: TickerResponse = decode(Self::ID, data)?;
        if !resp.error.is_empty() {
            return Err(CoreError::MalformedResponse {
                exchange: Self::ID.into(),
                message: resp.error.join("; "),
            });
        }

        let key = Self::result_key(crypto, fiat);
        let ticker = resp.result.get(&key).ok_or_else(|| CoreError::MalformedResponse {
            exchange: Self::ID.into(),
            message: format!("No ticker under '{key}'"),
        })?;

        ticker
            .a
            .first()
            .ok_or_else(|| CoreError::MalformedResponse {
                exchange: Self::ID.into(),
                message: format!("Empty ask array under '{key}'"),
            })?
            .to_rate(Self::ID)
    }
}
