// ═══════════════════════════════════════════════════════════════════
// Integration Tests — CryptoTicker facade over real HTTP (wiremock)
// ═══════════════════════════════════════════════════════════════════

use serde_json::Value;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crypto_ticker_core::errors::CoreError;
use crypto_ticker_core::exchanges::kraken::KrakenExchange;
use crypto_ticker_core::exchanges::registry::ExchangeRegistry;
use crypto_ticker_core::exchanges::traits::{Exchange, PairTable};
use crypto_ticker_core::models::settings::TickerSettings;
use crypto_ticker_core::transport::{HttpTickerSource, TickerSource};
use crypto_ticker_core::CryptoTicker;

// ═══════════════════════════════════════════════════════════════════
// Kraken-shaped exchange served by a local mock server
// ═══════════════════════════════════════════════════════════════════

struct LocalKraken {
    base: String,
}

impl Exchange for LocalKraken {
    fn id(&self) -> &str {
        "local-kraken"
    }

    fn name(&self) -> &str {
        "Local Kraken"
    }

    fn homepage(&self) -> &str {
        "http://localhost"
    }

    fn pairs(&self) -> PairTable {
        &[("BTC", &["USD", "EUR"]), ("ETH", &["USD"])]
    }

    fn request_url(&self, crypto: &str, fiat: &str) -> String {
        format!("{}/0/public/Ticker?pair={crypto}{fiat}", self.base)
    }

    fn extract_rate(&self, data: &Value, crypto: &str, fiat: &str) -> Result<f64, CoreError> {
        KrakenExchange.extract_rate(data, crypto, fiat)
    }
}

async fn ticker_for(server: &MockServer) -> CryptoTicker {
    let settings = TickerSettings::default();
    let registry = ExchangeRegistry::with_exchanges(vec![Box::new(LocalKraken {
        base: server.uri(),
    })])
    .unwrap();
    CryptoTicker::with_parts(
        Arc::new(registry),
        Arc::new(HttpTickerSource::new(&settings)),
        settings,
    )
}

async fn mount_ticker(server: &MockServer, pair: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/0/public/Ticker"))
        .and(query_param("pair", pair))
        .respond_with(template)
        .mount(server)
        .await;
}

// ═══════════════════════════════════════════════════════════════════
// HttpTickerSource
// ═══════════════════════════════════════════════════════════════════

mod http_source {
    use super::*;

    #[tokio::test]
    async fn returns_body_text() {
        let server = MockServer::start().await;
        mount_ticker(&server, "BTCUSD", ResponseTemplate::new(200).set_body_string("hello")).await;

        let source = HttpTickerSource::default();
        let body = source
            .fetch_body(&format!("{}/0/public/Ticker?pair=BTCUSD", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn empty_body_is_not_an_error_at_transport_level() {
        let server = MockServer::start().await;
        mount_ticker(&server, "BTCUSD", ResponseTemplate::new(200)).await;

        let source = HttpTickerSource::default();
        let body = source
            .fetch_body(&format!("{}/0/public/Ticker?pair=BTCUSD", server.uri()))
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn error_status_is_network_error() {
        let server = MockServer::start().await;
        mount_ticker(&server, "BTCUSD", ResponseTemplate::new(503)).await;

        let source = HttpTickerSource::default();
        let err = source
            .fetch_body(&format!("{}/0/public/Ticker?pair=BTCUSD", server.uri()))
            .await
            .unwrap_err();
        match err {
            CoreError::Network { message, .. } => assert!(message.contains("503")),
            other => panic!("Expected Network, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn connection_error_keeps_pair_in_message() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{port}/0/public/Ticker?pair=BTCUSD");

        let err = HttpTickerSource::default().fetch_body(&url).await.unwrap_err();
        match err {
            CoreError::Network { message, .. } => assert!(message.contains("pair=BTCUSD")),
            other => panic!("Expected Network, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(wiremock::matchers::header("user-agent", "ticker-test/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let settings = TickerSettings {
            user_agent: "ticker-test/1".into(),
            ..TickerSettings::default()
        };
        let body = HttpTickerSource::new(&settings)
            .fetch_body(&server.uri())
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }
}

// ═══════════════════════════════════════════════════════════════════
// CryptoTicker — picker queries
// ═══════════════════════════════════════════════════════════════════

mod facade_queries {
    use super::*;

    #[test]
    fn default_ticker_has_builtin_exchanges() {
        let ticker = CryptoTicker::new();
        assert!(ticker.exchange_exists("kraken-com"));
        assert_eq!(ticker.list_exchange_ids().len(), 5);
        assert_eq!(ticker.exchange_name("coinmate-io").unwrap(), "Coinmate");
        assert_eq!(ticker.exchange_homepage("kraken-com").unwrap(), "https://www.kraken.com");
    }

    #[test]
    fn picker_flow() {
        let ticker = CryptoTicker::default();
        let exchanges = ticker.list_exchanges();
        let kraken = exchanges.iter().find(|e| e.code == "kraken-com").unwrap();

        let cryptos = ticker.list_supported_cryptos(&kraken.code).unwrap();
        assert_eq!(cryptos[0].code, "BTC");

        let fiats = ticker
            .list_supported_pairs(&kraken.code, &cryptos[0].code)
            .unwrap()
            .unwrap();
        assert_eq!(fiats[0].code, "USD");
        assert_eq!(fiats[0].text, "USD ($)");

        assert!(ticker.supports_crypto("kraken-com", "BTC").unwrap());
        assert!(ticker.supports_pair("kraken-com", "BTC", "USD").unwrap());
        assert!(ticker.validate_selection("kraken-com", "BTC", "USD").is_ok());
    }

    #[test]
    fn with_settings_keeps_settings() {
        let settings = TickerSettings {
            timeout_secs: 3,
            ..TickerSettings::default()
        };
        let ticker = CryptoTicker::with_settings(settings.clone());
        assert_eq!(ticker.settings(), &settings);
    }

    #[test]
    fn debug_lists_exchanges() {
        let debug = format!("{:?}", CryptoTicker::new());
        assert!(debug.contains("kraken-com"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// CryptoTicker — end-to-end rate fetching
// ═══════════════════════════════════════════════════════════════════

mod facade_rates {
    use super::*;

    #[tokio::test]
    async fn get_rate_end_to_end() {
        let server = MockServer::start().await;
        mount_ticker(
            &server,
            "BTCUSD",
            ResponseTemplate::new(200)
                .set_body_string(r#"{"error":[],"result":{"XXBTZUSD":{"a":["50000.1","1","1"]}}}"#),
        )
        .await;

        let ticker = ticker_for(&server).await;
        let quote = ticker.get_rate("local-kraken", "BTC", "USD").await.unwrap();
        assert_eq!(quote.rate, 50000.1);
        assert_eq!(quote.fiat, "USD");
    }

    #[tokio::test]
    async fn fetch_rate_callback_end_to_end() {
        let server = MockServer::start().await;
        mount_ticker(
            &server,
            "ETHUSD",
            ResponseTemplate::new(200)
                .set_body_string(r#"{"result":{"XETHZUSD":{"a":["3100.25","1","1"]}}}"#),
        )
        .await;

        let ticker = ticker_for(&server).await;
        let rates = Arc::new(Mutex::new(Vec::new()));
        let sink = rates.clone();
        ticker
            .fetch_rate("local-kraken", "ETH", "USD", move |rate| {
                sink.lock().unwrap().push(rate);
            })
            .unwrap()
            .await
            .unwrap();

        assert_eq!(*rates.lock().unwrap(), vec![3100.25]);
    }

    #[tokio::test]
    async fn server_error_never_fires_callback() {
        let server = MockServer::start().await;
        mount_ticker(&server, "BTCEUR", ResponseTemplate::new(500)).await;

        let ticker = ticker_for(&server).await;
        let rates = Arc::new(Mutex::new(Vec::<f64>::new()));
        let sink = rates.clone();
        ticker
            .fetch_rate("local-kraken", "BTC", "EUR", move |rate| {
                sink.lock().unwrap().push(rate);
            })
            .unwrap()
            .await
            .unwrap();

        assert!(rates.lock().unwrap().is_empty());
        assert!(matches!(
            ticker.get_rate("local-kraken", "BTC", "EUR").await,
            Err(CoreError::Network { .. })
        ));
    }

    #[test]
    fn fetch_rate_without_runtime_is_an_error() {
        let ticker = CryptoTicker::new();
        let result = ticker.fetch_rate("kraken-com", "BTC", "USD", |_| {});
        assert!(matches!(result, Err(CoreError::NoRuntime(_))));
    }

    #[test]
    fn subscription_without_runtime_is_an_error() {
        let ticker = CryptoTicker::new();
        let mut sub = ticker.subscribe();
        let result = sub.request("kraken-com", "BTC", "USD", |_| {});
        assert!(matches!(result, Err(CoreError::NoRuntime(_))));
        assert!(!sub.is_pending());
    }

    #[tokio::test]
    async fn subscription_end_to_end() {
        let server = MockServer::start().await;
        mount_ticker(
            &server,
            "BTCUSD",
            ResponseTemplate::new(200)
                .set_body_string(r#"{"result":{"XXBTZUSD":{"a":["42000","1","1"]}}}"#),
        )
        .await;

        let ticker = ticker_for(&server).await;
        let mut sub = ticker.subscribe();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        sub.request("local-kraken", "BTC", "USD", move |r| {
            let _ = tx.send(r.map(|q| q.rate));
        })
        .unwrap();

        assert_eq!(rx.recv().await.unwrap().unwrap(), 42000.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Logging
// ═══════════════════════════════════════════════════════════════════

mod logging {
    use crypto_ticker_core::logging::init_logging;
    use crypto_ticker_core::models::settings::LogSettings;

    #[test]
    fn second_init_is_an_error() {
        let settings = LogSettings {
            level: "warn".into(),
            with_target: true,
        };
        assert!(init_logging(&settings).is_ok());
        assert!(init_logging(&settings).is_err());
    }
}
