use serde_json::Value;

use crate::errors::CoreError;

/// Supported pairs of one exchange: crypto code → fiat codes.
///
/// Pickers list cryptos and fiats exactly in this order, most liquid first.
pub type PairTable = &'static [(&'static str, &'static [&'static str])];

/// Trait abstraction for a price-quoting exchange.
///
/// Each exchange (BitBay, Bitstamp, Coinmate, Kraken, Binance) implements
/// this trait. The URL scheme and the JSON path to the ask price are the
/// only things that differ between them; everything else (validation,
/// fetching, error handling) is shared.
pub trait Exchange: Send + Sync {
    /// Unique slug used in configuration (e.g., "kraken-com").
    fn id(&self) -> &str;

    /// Human-readable name (for pickers/logs).
    fn name(&self) -> &str;

    fn homepage(&self) -> &str;

    /// Supported (crypto, fiat) matrix in declaration order.
    fn pairs(&self) -> PairTable;

    /// Build the ticker URL for a pair. Pure; no validation.
    fn request_url(&self, crypto: &str, fiat: &str) -> String;

    /// Pull the ask price out of a parsed ticker response.
    fn extract_rate(&self, data: &Value, crypto: &str, fiat: &str) -> Result<f64, CoreError>;

    /// Fiat codes supported for `crypto`, or `None` if the crypto is not listed.
    fn fiats_for(&self, crypto: &str) -> Option<&'static [&'static str]> {
        self.pairs()
            .iter()
            .find(|(c, _)| *c == crypto)
            .map(|(_, fiats)| *fiats)
    }

    fn supports_crypto(&self, crypto: &str) -> bool {
        self.fiats_for(crypto).is_some()
    }

    fn supports_pair(&self, crypto: &str, fiat: &str) -> bool {
        self.fiats_for(crypto)
            .is_some_and(|fiats| fiats.contains(&fiat))
    }
}
