use std::sync::Arc;
use tracing::warn;

use crate::catalog::{crypto_display_name, fiat_display_name};
use crate::errors::CoreError;
use crate::exchanges::registry::ExchangeRegistry;
use crate::models::selection::SelectionItem;

/// Read-only queries the configuration UI uses to fill its pickers and to
/// check a selection before asking for a rate.
///
/// Lookup errors on the exchange id are returned to the caller. Everything
/// about cryptos and fiats is permissive: an unsupported value is logged and
/// answered with `false`/`None`, never an error.
pub struct QueryService {
    registry: Arc<ExchangeRegistry>,
}

impl QueryService {
    pub fn new(registry: Arc<ExchangeRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExchangeRegistry {
        &self.registry
    }

    /// All exchanges as (id, display name) picker entries, in declaration order.
    pub fn list_exchanges(&self) -> Vec<SelectionItem> {
        self.registry
            .iter()
            .map(|e| SelectionItem::new(e.id(), e.name()))
            .collect()
    }

    /// Cryptos quoted on an exchange, in declaration order.
    pub fn list_supported_cryptos(
        &self,
        exchange_id: &str,
    ) -> Result<Vec<SelectionItem>, CoreError> {
        let exchange = self.registry.get(exchange_id)?;
        exchange
            .pairs()
            .iter()
            .map(|(code, _)| -> Result<SelectionItem, CoreError> {
                Ok(SelectionItem::new(*code, crypto_display_name(code)?))
            })
            .collect()
    }

    /// Fiats a crypto can be priced in on an exchange, in declaration order.
    ///
    /// Returns `Ok(None)` (and logs) when the crypto is not listed for the exchange.
    pub fn list_supported_pairs(
        &self,
        exchange_id: &str,
        crypto: &str,
    ) -> Result<Option<Vec<SelectionItem>>, CoreError> {
        let exchange = self.registry.get(exchange_id)?;
        let Some(fiats) = exchange.fiats_for(crypto) else {
            warn!(
                exchange = exchange_id,
                exchange_name = exchange.name(),
                crypto,
                "Can't get fiat pairs for crypto"
            );
            return Ok(None);
        };

        let items = fiats
            .iter()
            .map(|code| -> Result<SelectionItem, CoreError> {
                Ok(SelectionItem::new(*code, fiat_display_name(code)?))
            })
            .collect::<Result<Vec<_>, CoreError>>()?;
        Ok(Some(items))
    }

    pub fn supports_crypto(&self, exchange_id: &str, crypto: &str) -> Result<bool, CoreError> {
        self.registry.supports_crypto(exchange_id, crypto)
    }

    pub fn supports_pair(
        &self,
        exchange_id: &str,
        crypto: &str,
        fiat: &str,
    ) -> Result<bool, CoreError> {
        self.registry.supports_pair(exchange_id, crypto, fiat)
    }

    /// Strict form of [`supports_pair`](Self::supports_pair) for callers that
    /// want an error to propagate, e.g. before starting a rate request.
    pub fn validate_selection(
        &self,
        exchange_id: &str,
        crypto: &str,
        fiat: &str,
    ) -> Result<(), CoreError> {
        if self.supports_pair(exchange_id, crypto, fiat)? {
            Ok(())
        } else {
            Err(CoreError::UnsupportedPair {
                exchange: exchange_id.to_string(),
                crypto: crypto.to_string(),
                fiat: fiat.to_string(),
            })
        }
    }
}
