use serde::Deserialize;
use serde_json::Value;

use super::traits::{Exchange, PairTable};
use super::{decode, RateValue};
use crate::errors::CoreError;

const BASE_URL: &str = "https://api1.binance.com/api/v3/ticker/price";

/// Binance symbol price ticker.
///
/// Binance has no fiat USD book, so pairs quote against EUR, GBP and the
/// USD stablecoins. The "rate" is the latest price (`.price`), not the ask.
pub struct BinanceExchange;

impl BinanceExchange {
    pub const ID: &'static str = "binance-com";
}

static PAIRS: PairTable = &[
    ("BTC", &["USDT", "EUR", "GBP", "BUSD"]),
    ("ETH", &["USDT", "EUR", "GBP", "BUSD"]),
    ("LTC", &["USDT", "EUR", "BUSD"]),
    ("XRP", &["USDT", "EUR", "GBP", "BUSD"]),
    ("ADA", &["USDT", "EUR", "GBP", "BUSD"]),
    ("DOGE", &["USDT", "EUR", "GBP", "BUSD"]),
    ("DOT", &["USDT", "EUR", "BUSD"]),
    ("LINK", &["USDT", "EUR", "GBP", "BUSD"]),
];

#[derive(Deserialize)]
struct PriceTicker {
    price: RateValue,
}

impl Exchange for BinanceExchange {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Binance"
    }

    fn homepage(&self) -> &str {
        "https://www.binance.com"
    }

    fn pairs(&self) -> PairTable {
        PAIRS
    }

    fn request_url(&self, crypto: &str, fiat: &str) -> String {
        format!("{BASE_URL}?symbol={crypto}{fiat}")
    }

    fn extract_rate(&self, data: &Value, _crypto: &str, _fiat: &str) -> Result<f64, CoreError> {
        let ticker: PriceTicker = decode(Self::ID, data)?;
        ticker.price.to_rate(Self::ID)
    }
}
