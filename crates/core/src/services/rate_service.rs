use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::errors::CoreError;
use crate::exchanges::registry::ExchangeRegistry;
use crate::exchanges::traits::Exchange;
use crate::models::quote::RateQuote;
use crate::models::settings::TickerSettings;
use crate::transport::TickerSource;

/// Fetches the current rate of a pair from its exchange.
///
/// Pipeline per request:
/// 1. Resolve the exchange (unknown id → hard error).
/// 2. Build the ticker URL and issue a single GET, bounded by the configured timeout.
/// 3. Empty body → `EmptyResponse`; unparsable JSON or missing field → `MalformedResponse`.
/// 4. Otherwise extract the rate.
///
/// Every soft failure is logged exactly once, where it happens. The pair is
/// NOT re-validated here; use `QueryService::validate_selection` first.
/// No caching, no retries: one call, one request.
#[derive(Clone)]
pub struct RateService {
    registry: Arc<ExchangeRegistry>,
    source: Arc<dyn TickerSource>,
    timeout: Duration,
}

impl RateService {
    pub fn new(
        registry: Arc<ExchangeRegistry>,
        source: Arc<dyn TickerSource>,
        settings: &TickerSettings,
    ) -> Self {
        Self {
            registry,
            source,
            timeout: settings.request_timeout(),
        }
    }

    /// Fetch a rate and return it (or the reason it failed) to the caller.
    pub async fn get_rate(
        &self,
        exchange_id: &str,
        crypto: &str,
        fiat: &str,
    ) -> Result<RateQuote, CoreError> {
        let exchange = self.registry.get(exchange_id)?;
        let url = exchange.request_url(crypto, fiat);

        let body = match tokio::time::timeout(self.timeout, self.source.fetch_body(&url)).await {
            Ok(Ok(body)) => body,
            Ok(Err(e)) => {
                let e = e.for_exchange(exchange_id);
                warn!(exchange = exchange_id, crypto, fiat, error = %e, "Rate request failed");
                return Err(e);
            }
            Err(_) => {
                warn!(
                    exchange = exchange_id,
                    crypto,
                    fiat,
                    timeout_secs = self.timeout.as_secs(),
                    "Rate request timed out"
                );
                return Err(CoreError::Timeout {
                    exchange: exchange_id.to_string(),
                    after_secs: self.timeout.as_secs(),
                });
            }
        };

        let rate = resolve_body(exchange, &body, crypto, fiat)?;
        debug!(exchange = exchange_id, crypto, fiat, rate, "Rate fetched");
        Ok(RateQuote::new(exchange_id, crypto, fiat, rate))
    }

    /// Fire-and-forget form used by the widget.
    ///
    /// Returns immediately after spawning the request. `on_success` runs at
    /// most once, only with a valid rate; on any soft failure it never runs
    /// and the failure is only visible in the logs. An unknown exchange id, or
    /// a calling thread with no Tokio runtime, is reported synchronously and
    /// nothing is spawned.
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
        self.registry.get(exchange_id)?;
        let runtime = current_runtime()?;

        let service = self.clone();
        let (exchange_id, crypto, fiat) = (exchange_id.to_string(), crypto.to_string(), fiat.to_string());
        Ok(runtime.spawn(async move {
            if let Ok(quote) = service.get_rate(&exchange_id, &crypto, &fiat).await {
                on_success(quote.rate);
            }
        }))
    }

    /// Start a subscription: a handle that keeps at most one request in flight.
    pub fn subscribe(&self) -> RateSubscription {
        RateSubscription {
            service: self.clone(),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }
}

/// Handle of the runtime the caller is running on.
fn current_runtime() -> Result<Handle, CoreError> {
    Handle::try_current().map_err(|e| CoreError::NoRuntime(e.to_string()))
}

/// Turn a raw ticker body into a rate, logging soft failures.
pub fn resolve_body(
    exchange: &dyn Exchange,
    body: &str,
    crypto: &str,
    fiat: &str,
) -> Result<f64, CoreError> {
    if body.is_empty() {
        warn!(exchange = exchange.id(), crypto, fiat, "Empty response body");
        return Err(CoreError::EmptyResponse {
            exchange: exchange.id().to_string(),
        });
    }

    let json: serde_json::Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(e) => {
            error!(exchange = exchange.id(), error = %e, body, "Failed parsing response");
            return Err(CoreError::from(e).for_exchange(exchange.id()));
        }
    };

    exchange.extract_rate(&json, crypto, fiat).map_err(|e| {
        error!(exchange = exchange.id(), error = %e, body, "Failed extracting rate from response");
        e
    })
}

/// One logical "current selection" of the widget.
///
/// Each [`request`](Self::request) supersedes the previous one: the earlier
/// task is aborted, and should it already be past its last await point, its
/// result is discarded by generation check. Dropping the subscription
/// cancels whatever is in flight.
pub struct RateSubscription {
    service: RateService,
    generation: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
}

impl RateSubscription {
    /// Request a rate for a new selection, cancelling any earlier one.
    ///
    /// `on_result` receives the typed outcome, so the caller can tell a
    /// failure from a request that is still pending. It is not called for
    /// superseded or cancelled requests. Returns the request generation.
    pub fn request<F>(
        &mut self,
        exchange_id: &str,
        crypto: &str,
        fiat: &str,
        on_result: F,
    ) -> Result<u64, CoreError>
    where
        F: FnOnce(Result<RateQuote, CoreError>) + Send + 'static,
    {
        self.service.registry.get(exchange_id)?;
        let runtime = current_runtime()?;

        self.cancel();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let service = self.service.clone();
        let current = Arc::clone(&self.generation);
        let (exchange_id, crypto, fiat) = (exchange_id.to_string(), crypto.to_string(), fiat.to_string());
        self.in_flight = Some(runtime.spawn(async move {
            let result = service.get_rate(&exchange_id, &crypto, &fiat).await;
            if current.load(Ordering::SeqCst) != generation {
                debug!(exchange = %exchange_id, generation, "Discarding superseded rate");
                return;
            }
            on_result(result);
        }));

        Ok(generation)
    }

    /// Abort the in-flight request, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("Cancelling in-flight rate request");
            }
            handle.abort();
        }
        // Invalidate a completion that raced past the abort.
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// True while the latest request has not completed.
    pub fn is_pending(&self) -> bool {
        self.in_flight.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

impl Drop for RateSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
