pub mod catalog;
pub mod errors;
pub mod exchanges;
pub mod logging;
pub mod models;
pub mod services;
pub mod transport;

use std::sync::Arc;
use tokio::task::JoinHandle;

use errors::CoreError;
use exchanges::registry::ExchangeRegistry;
use models::{quote::RateQuote, selection::SelectionItem, settings::TickerSettings};
use services::{
    query_service::QueryService,
    rate_service::{RateService, RateSubscription},
};
use transport::{HttpTickerSource, TickerSource};

/// Main entry point for the Crypto Ticker core library.
///
/// The widget host asks it two kinds of questions: synchronous picker
/// queries (which exchanges, cryptos, fiats are available) and rate
/// requests, which complete asynchronously.
#[must_use]
pub struct CryptoTicker {
    settings: TickerSettings,
    query_service: QueryService,
    rate_service: RateService,
}

impl std::fmt::Debug for CryptoTicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoTicker")
            .field("exchanges", &self.query_service.registry().exchange_ids())
            .field("settings", &self.settings)
            .finish()
    }
}

impl CryptoTicker {
    /// Built-in exchanges, real HTTP, default settings.
    pub fn new() -> Self {
        Self::with_settings(TickerSettings::default())
    }

    pub fn with_settings(settings: TickerSettings) -> Self {
        let source = Arc::new(HttpTickerSource::new(&settings));
        Self::build(ExchangeRegistry::global(), source, settings)
    }

    /// Custom registry and ticker source (tests, alternative transports).
    pub fn with_parts(
        registry: Arc<ExchangeRegistry>,
        source: Arc<dyn TickerSource>,
        settings: TickerSettings,
    ) -> Self {
        Self::build(registry, source, settings)
    }

    #[must_use]
    pub fn settings(&self) -> &TickerSettings {
        &self.settings
    }

    // ── Picker Queries ──────────────────────────────────────────────

    #[must_use]
    pub fn exchange_exists(&self, exchange_id: &str) -> bool {
        self.query_service.registry().exists(exchange_id)
    }

    #[must_use]
    pub fn list_exchange_ids(&self) -> Vec<&str> {
        self.query_service.registry().exchange_ids()
    }

    #[must_use]
    pub fn list_exchanges(&self) -> Vec<SelectionItem> {
        self.query_service.list_exchanges()
    }

    pub fn exchange_name(&self, exchange_id: &str) -> Result<&str, CoreError> {
        self.query_service.registry().exchange_name(exchange_id)
    }

    pub fn exchange_homepage(&self, exchange_id: &str) -> Result<&str, CoreError> {
        self.query_service.registry().exchange_homepage(exchange_id)
    }

    pub fn list_supported_cryptos(
        &self,
        exchange_id: &str,
    ) -> Result<Vec<SelectionItem>, CoreError> {
        self.query_service.list_supported_cryptos(exchange_id)
    }

    pub fn list_supported_pairs(
        &self,
        exchange_id: &str,
        crypto: &str,
    ) -> Result<Option<Vec<SelectionItem>>, CoreError> {
        self.query_service.list_supported_pairs(exchange_id, crypto)
    }

    pub fn supports_crypto(&self, exchange_id: &str, crypto: &str) -> Result<bool, CoreError> {
        self.query_service.supports_crypto(exchange_id, crypto)
    }

    pub fn supports_pair(
        &self,
        exchange_id: &str,
        crypto: &str,
        fiat: &str,
    ) -> Result<bool, CoreError> {
        self.query_service.supports_pair(exchange_id, crypto, fiat)
    }

    pub fn validate_selection(
        &self,
        exchange_id: &str,
        crypto: &str,
        fiat: &str,
    ) -> Result<(), CoreError> {
        self.query_service.validate_selection(exchange_id, crypto, fiat)
    }

    // ── Rates ───────────────────────────────────────────────────────

    /// Fetch a rate, returning the typed outcome.
    pub async fn get_rate(
        &self,
        exchange_id: &str,
        crypto: &str,
        fiat: &str,
    ) -> Result<RateQuote, CoreError> {
        self.rate_service.get_rate(exchange_id, crypto, fiat).await
    }

    /// Callback form: `on_success` fires at most once, only with a valid rate.
    ///
    /// The request runs on the caller's Tokio runtime. Called from a thread
    /// without one, this returns [`CoreError::NoRuntime`] instead of spawning.
    pub fn fetch_rate<F>(
        &self,
        exchange_id: &str,
        crypto: &str,
        fiat: &str,
        on_success: F,
    ) -> Result<JoinHandle<()>, CoreError>
    where
        F: FnOnce(f64) + Send + 'static,
    {
        self.rate_service
            .fetch_rate(exchange_id, crypto, fiat, on_success)
    }

    /// A subscription keeping at most one request in flight.
    ///
    /// Like [`fetch_rate`](Self::fetch_rate), its requests need a Tokio runtime
    /// on the calling thread.
    pub fn subscribe(&self) -> RateSubscription {
        self.rate_service.subscribe()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        registry: Arc<ExchangeRegistry>,
        source: Arc<dyn TickerSource>,
        settings: TickerSettings,
    ) -> Self {
        let rate_service = RateService::new(Arc::clone(&registry), source, &settings);
        let query_service = QueryService::new(registry);

        Self {
            settings,
            query_service,
            rate_service,
        }
    }
}

impl Default for CryptoTicker {
    fn default() -> Self {
        Self::new()
    }
}
