//! Events fetched from a JSON endpoint over HTTP.

use std::time::Duration;

use eventboard_core::Event;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::error::{ProviderError, ProviderResult};
use crate::normalize::normalize_events;
use crate::raw_event::RawEventList;
use crate::source::{BoxFuture, EventSource};

const PROVIDER: &str = "http";

/// Configuration for [`HttpSource`].
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    pub url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl HttpSourceConfig {
    /// Parses and validates the endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL does not parse or is not
    /// http(s).
    pub fn new(url: &str) -> ProviderResult<Self> {
        let url = Url::parse(url).map_err(|e| {
            ProviderError::configuration(format!("invalid source URL {url:?}: {e}"))
                .with_provider(PROVIDER)
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProviderError::configuration(format!(
                "unsupported URL scheme: {}",
                url.scheme()
            ))
            .with_provider(PROVIDER));
        }

        Ok(Self {
            url,
            timeout: Duration::from_secs(30),
            user_agent: format!("eventboard/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fetches a JSON event list with one GET per page load.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpSource {
    /// Creates the source and its HTTP client.
    pub fn new(config: HttpSourceConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                ProviderError::network(format!("Failed to create HTTP client: {}", e))
                    .with_provider(PROVIDER)
            })?;

        Ok(Self { client, config })
    }

    pub fn url(&self) -> &Url {
        &self.config.url
    }

    async fn fetch(&self) -> ProviderResult<Vec<Event>> {
        debug!(url = %self.config.url, "fetching events");

        let response = self
            .client
            .get(self.config.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                ProviderError::network(format!("request failed: {}", e))
                    .with_provider(PROVIDER)
                    .with_source(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.config.url, status = %status, "events endpoint returned an error");
            return Err(status_error(status));
        }

        let body = response.text().await.map_err(|e| {
            ProviderError::network(format!("failed to read response body: {}", e))
                .with_provider(PROVIDER)
                .with_source(e)
        })?;

        let list: RawEventList = serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("malformed event list: {}", e))
                .with_provider(PROVIDER)
                .with_source(e)
        })?;

        let events = normalize_events(list.into_events()).map_err(|e| e.with_provider(PROVIDER))?;
        debug!(count = events.len(), "fetched events");
        Ok(events)
    }
}

fn status_error(status: StatusCode) -> ProviderError {
    let message = format!("HTTP {}", status);
    let error = if status == StatusCode::NOT_FOUND {
        ProviderError::not_found(message)
    } else if status.is_server_error() {
        ProviderError::server(message)
    } else {
        ProviderError::invalid_response(message)
    };
    error.with_provider(PROVIDER)
}

impl EventSource for HttpSource {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<Event>>> {
        Box::pin(self.fetch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response and returns the base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });
        format!("http://{addr}/api/events")
    }

    fn source(url: &str) -> HttpSource {
        HttpSource::new(HttpSourceConfig::new(url).unwrap().with_timeout(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn config_rejects_bad_urls() {
        let err = HttpSourceConfig::new("not a url").unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::ConfigurationError);

        let err = HttpSourceConfig::new("ftp://example.org/events").unwrap_err();
        assert!(err.message().contains("ftp"));

        let config = HttpSourceConfig::new("https://example.org/api/events").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("eventboard/"));
    }

    #[tokio::test]
    async fn fetches_and_normalizes() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":1,"title":"Meetup","startDate":"2025-03-05T17:00:00Z","endDate":"2025-03-05T19:00:00Z","location":"In-person","joinLink":"https://maps.example.org"}]"#,
        )
        .await;

        let events = source(&url).fetch_events().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "1");
        assert!(events[0].location.is_in_person());
    }

    #[tokio::test]
    async fn not_found_status() {
        let url = serve_once("404 Not Found", "{}").await;
        let err = source(&url).fetch_events().await.unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::NotFound);
        assert_eq!(err.provider(), Some("http"));
    }

    #[tokio::test]
    async fn server_error_is_retryable() {
        let url = serve_once("503 Service Unavailable", "{}").await;
        let err = source(&url).fetch_events().await.unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::ServerError);
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn malformed_body() {
        let url = serve_once("200 OK", "<html>").await;
        let err = source(&url).fetch_events().await.unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::InvalidResponse);
    }

    #[tokio::test]
    async fn malformed_date_propagates() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":"x","title":"T","startDate":"tomorrow","endDate":"2025-03-05"}]"#,
        )
        .await;
        let err = source(&url).fetch_events().await.unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::InvalidResponse);
        assert!(err.message().contains("startDate"));
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(&format!("http://{addr}/"))
            .fetch_events()
            .await
            .unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::NetworkError);
    }
}
