use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::settings::TickerSettings;

/// Source of raw ticker bodies.
///
/// The rate pipeline only needs "GET this URL, give me the body text".
/// Production uses [`HttpTickerSource`]; tests swap in canned bodies.
#[async_trait]
pub trait TickerSource: Send + Sync {
    /// Perform a single GET and return the response body as text.
    /// An empty string is a valid return value; the caller decides what it means.
    async fn fetch_body(&self, url: &str) -> Result<String, CoreError>;
}

/// `reqwest`-backed ticker source.
pub struct HttpTickerSource {
    client: Client,
}

impl HttpTickerSource {
    pub fn new(settings: &TickerSettings) -> Self {
        let builder = Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(settings.user_agent.clone());
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for HttpTickerSource {
    fn default() -> Self {
        Self::new(&TickerSettings::default())
    }
}

#[async_trait]
impl TickerSource for HttpTickerSource {
    async fn fetch_body(&self, url: &str) -> Result<String, CoreError> {
        debug!(url, "GET ticker");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Network {
                exchange: String::new(),
                message: format!("HTTP {status}"),
            });
        }

        Ok(resp.text().await?)
    }
}
