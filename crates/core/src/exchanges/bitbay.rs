use serde::Deserialize;
use serde_json::Value;

use super::traits::{Exchange, PairTable};
use super::{decode, RateValue};
use crate::errors::CoreError;

const BASE_URL: &str = "https://bitbay.net/API/Public";

/// BitBay public ticker.
///
/// - **Endpoint**: `/API/Public/{CRYPTO}{FIAT}/ticker.json`
/// - **Rate path**: `.ask` (JSON number)
pub struct BitBayExchange;

impl BitBayExchange {
    pub const ID: &'static str = "bitbay-net";
}

static PAIRS: PairTable = &[
    ("BTC", &["PLN", "USD", "EUR", "GBP"]),
    ("ETH", &["PLN", "USD", "EUR", "GBP"]),
    ("LTC", &["PLN", "USD", "EUR", "GBP"]),
    ("XRP", &["PLN", "USD", "EUR", "GBP"]),
    ("DASH", &["PLN", "USD", "EUR"]),
    ("ZEC", &["PLN", "USD", "EUR"]),
    ("LINK", &["PLN", "USD", "EUR"]),
    ("DOT", &["PLN", "USD", "EUR"]),
];

#[derive(Deserialize)]
struct Ticker {
    ask: RateValue,
}

impl Exchange for BitBayExchange {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "BitBay"
    }

    fn homepage(&self) -> &str {
        "https://bitbay.net"
    }

    fn pairs(&self) -> PairTable {
        PAIRS
    }

    fn request_url(&self, crypto: &str, fiat: &str) -> String {
        format!("{BASE_URL}/{crypto}{fiat}/ticker.json")
    }

    fn extract_rate(&self, data: &Value, _crypto: &str, _fiat: &str) -> Result<f64, CoreError> {
        let ticker: Ticker = decode(Self::ID, data)?;
        ticker.ask.to_rate(Self::ID)
    }
}
