//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests to fetch listing and detail pages
//! - Error classification into `FetchError`
//!
//! There are no retries: a failed fetch is reported once and the caller
//! decides whether it is fatal.

use crate::config::Config;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// A successfully retrieved page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Content-Type header value (empty when absent)
    pub content_type: String,

    /// Page body
    pub body: String,
}

/// Source of pages for the crawler
///
/// The crawl loop only needs one capability: turn a URL into a page body or
/// a `FetchError`. Parsing into a document happens at the call site.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs one GET request for `url`
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration (user agent and timeouts)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use fishcat::config::Config;
/// use fishcat::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(config))
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .connect_timeout(Duration::from_secs(config.http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Formats the user agent: `CrawlerName/Version (+ContactURL; ContactEmail)`
pub fn user_agent_string(config: &Config) -> String {
    let ua = &config.user_agent;
    format!(
        "{}/{} (+{}; {})",
        ua.crawler_name, ua.crawler_version, ua.contact_url, ua.contact_email
    )
}

/// `PageFetcher` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the configuration and wraps it
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        fetch_url(&self.client, url.as_str()).await
    }
}

/// Fetches a URL and classifies any failure
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | `Ok(FetchedPage)` |
/// | HTTP 404 | `FetchError::NotFound` |
/// | Other non-2xx | `FetchError::Status` |
/// | Timeout | `FetchError::Timeout` |
/// | Connection / TLS / other transport failure | `FetchError::Transport` |
/// | Body could not be read | `FetchError::Body` |
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    let status = response.status();
    let final_url = response.url().to_string();

    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound {
            url: url.to_string(),
        });
    }

    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = response.text().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        source: e,
    })?;

    tracing::trace!("Fetched {} ({} bytes)", final_url, body.len());

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_format() {
        let mut config = Config::default();
        config.user_agent.crawler_name = "TestCrawler".to_string();
        config.user_agent.crawler_version = "1.0".to_string();
        config.user_agent.contact_url = "https://example.com/about".to_string();
        config.user_agent.contact_email = "admin@example.com".to_string();

        assert_eq!(
            user_agent_string(&config),
            "TestCrawler/1.0 (+https://example.com/about; admin@example.com)"
        );
    }

    #[tokio::test]
    async fn test_fetch_records_status_and_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html; charset=utf-8")
                    .set_body_string("<html></html>"),
            )
            .mount(&server)
            .await;

        let client = build_http_client(&Config::default()).unwrap();
        let page = fetch_url(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();

        assert_eq!(page.status_code, 200);
        assert_eq!(page.content_type, "text/html; charset=utf-8");
        assert_eq!(page.final_url, format!("{}/page", server.uri()));
        assert_eq!(page.body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_classifies_error_statuses() {
        let server = MockServer::start().await;
        Mock::given(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(path("/busy"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = build_http_client(&Config::default()).unwrap();
        let gone = fetch_url(&client, &format!("{}/gone", server.uri())).await;
        let busy = fetch_url(&client, &format!("{}/busy", server.uri())).await;

        assert!(matches!(gone, Err(FetchError::NotFound { .. })));
        assert!(matches!(busy, Err(FetchError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_fetch_closed_port_is_transport_error() {
        // Bind an ephemeral port, then release it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = build_http_client(&Config::default()).unwrap();
        let result = fetch_url(&client, &format!("http://{}/", addr)).await;

        assert!(matches!(result, Err(FetchError::Transport { .. })));
    }
}
