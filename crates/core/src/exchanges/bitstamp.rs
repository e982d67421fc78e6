use serde::Deserialize;
use serde_json::Value;

use super::traits::{Exchange, PairTable};
use super::{decode, RateValue};
use crate::errors::CoreError;

const BASE_URL: &str = "https://www.bitstamp.net/api/v2/ticker";

/// Bitstamp v2 ticker.
///
/// Pair symbols in the path are lowercase (`btcusd`), the ask arrives as a
/// decimal string.
pub struct BitstampExchange;

impl BitstampExchange {
    pub const ID: &'static str = "bitstamp-net";
}

static PAIRS: PairTable = &[
    ("BTC", &["USD", "EUR", "GBP"]),
    ("ETH", &["USD", "EUR", "GBP"]),
    ("LTC", &["USD", "EUR", "GBP"]),
    ("XRP", &["USD", "EUR", "GBP"]),
    ("BCH", &["USD", "EUR"]),
    ("LINK", &["USD", "EUR"]),
];

#[derive(Deserialize)]
struct Ticker {
    ask: RateValue,
}

impl Exchange for BitstampExchange {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Bitstamp"
    }

    fn homepage(&self) -> &str {
        "https://www.bitstamp.net"
    }

    fn pairs(&self) -> PairTable {
        PAIRS
    }

    fn request_url(&self, crypto: &str, fiat: &str) -> String {
        format!(
            "{BASE_URL}/{}{}",
            crypto.to_lowercase(),
            fiat.to_lowercase()
        )
    }

    fn extract_rate(&self, data: &Value, _crypto: &str, _fiat: &str) -> Result<f64, CoreError> {
        let ticker: Ticker = decode(Self::ID, data)?;
        ticker.ask.to_rate(Self::ID)
    }
}
