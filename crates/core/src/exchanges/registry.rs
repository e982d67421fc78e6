use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::warn;

use crate::catalog::{find_crypto, find_fiat};
use crate::errors::CoreError;

use super::binance::BinanceExchange;
use super::bitbay::BitBayExchange;
use super::bitstamp::BitstampExchange;
use super::coinmate::CoinmateExchange;
use super::kraken::KrakenExchange;
use super::traits::Exchange;

static GLOBAL: Lazy<Arc<ExchangeRegistry>> =
    Lazy::new(|| Arc::new(ExchangeRegistry::new_with_defaults()));

/// Registry of all known exchanges, in declaration order.
///
/// Built once and read-only afterwards, so a shared reference can be used
/// from any number of tasks without locking. Every exchange is checked
/// against the catalogs when it is registered: a pair table can only name
/// known cryptos and fiats, and never lists a crypto with no fiats.
pub struct ExchangeRegistry {
    exchanges: Vec<Box<dyn Exchange>>,
}

impl ExchangeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            exchanges: Vec::new(),
        }
    }

    /// Create a registry with all built-in exchanges.
    pub fn new_with_defaults() -> Self {
        let mut registry = Self::new();
        let builtin: Vec<Box<dyn Exchange>> = vec![
            Box::new(BitBayExchange),
            Box::new(BitstampExchange),
            Box::new(CoinmateExchange),
            Box::new(KrakenExchange),
            Box::new(BinanceExchange),
        ];
        for exchange in builtin {
            // Only fails if a catalog entry was removed.
            if let Err(e) = registry.register(exchange) {
                warn!(error = %e, "Skipping built-in exchange");
            }
        }
        registry
    }

    /// Build a registry from an explicit list of exchanges.
    pub fn with_exchanges(exchanges: Vec<Box<dyn Exchange>>) -> Result<Self, CoreError> {
        let mut registry = Self::new();
        for exchange in exchanges {
            registry.register(exchange)?;
        }
        Ok(registry)
    }

    /// Process-wide registry with the built-in exchanges.
    pub fn global() -> Arc<ExchangeRegistry> {
        Arc::clone(&GLOBAL)
    }

    /// Register a new exchange after validating its pair table.
    ///
    /// Every crypto and fiat must be in the catalogs, each crypto must list
    /// at least one fiat, and no crypto or (crypto, fiat) pair may repeat.
    pub fn register(&mut self, exchange: Box<dyn Exchange>) -> Result<(), CoreError> {
        if self.exists(exchange.id()) {
            return Err(CoreError::DuplicateExchange(exchange.id().to_string()));
        }
        let pairs = exchange.pairs();
        for (i, (crypto, fiats)) in pairs.iter().enumerate() {
            find_crypto(crypto)?;
            if pairs[..i].iter().any(|(c, _)| c == crypto) {
                return Err(CoreError::DuplicatePairEntry {
                    exchange: exchange.id().to_string(),
                    entry: crypto.to_string(),
                });
            }
            if fiats.is_empty() {
                return Err(CoreError::EmptyPairList {
                    exchange: exchange.id().to_string(),
                    crypto: crypto.to_string(),
                });
            }
            for (j, fiat) in fiats.iter().enumerate() {
                find_fiat(fiat)?;
                if fiats[..j].contains(fiat) {
                    return Err(CoreError::DuplicatePairEntry {
                        exchange: exchange.id().to_string(),
                        entry: format!("{crypto}/{fiat}"),
                    });
                }
            }
        }
        self.exchanges.push(exchange);
        Ok(())
    }

    pub fn exists(&self, exchange_id: &str) -> bool {
        self.exchanges.iter().any(|e| e.id() == exchange_id)
    }

    /// Look up an exchange by id.
    pub fn get(&self, exchange_id: &str) -> Result<&dyn Exchange, CoreError> {
        self.exchanges
            .iter()
            .find(|e| e.id() == exchange_id)
            .map(|e| e.as_ref())
            .ok_or_else(|| CoreError::UnknownExchange(exchange_id.to_string()))
    }

    /// All exchange ids, in registration order.
    pub fn exchange_ids(&self) -> Vec<&str> {
        self.exchanges.iter().map(|e| e.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Exchange> {
        self.exchanges.iter().map(|e| e.as_ref())
    }

    pub fn exchange_name(&self, exchange_id: &str) -> Result<&str, CoreError> {
        self.get(exchange_id).map(|e| e.name())
    }

    pub fn exchange_homepage(&self, exchange_id: &str) -> Result<&str, CoreError> {
        self.get(exchange_id).map(|e| e.homepage())
    }

    /// Whether `crypto` is listed for the exchange. Unknown exchange is an error.
    pub fn supports_crypto(&self, exchange_id: &str, crypto: &str) -> Result<bool, CoreError> {
        Ok(self.get(exchange_id)?.supports_crypto(crypto))
    }

    /// Whether the (crypto, fiat) pair is quoted on the exchange.
    ///
    /// An unsupported crypto is logged once and answered with `false`.
    pub fn supports_pair(
        &self,
        exchange_id: &str,
        crypto: &str,
        fiat: &str,
    ) -> Result<bool, CoreError> {
        let exchange = self.get(exchange_id)?;
        if !exchange.supports_crypto(crypto) {
            warn!(exchange = exchange_id, crypto, "Crypto not supported on exchange");
            return Ok(false);
        }
        Ok(exchange.supports_pair(crypto, fiat))
    }
}

impl Default for ExchangeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
