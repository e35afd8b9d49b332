//! HTTP fetch of job-posting pages.
//!
//! - One GET per request, no retries.
//! - Browser-like `User-Agent`, HTML-preferring `Accept`, English `Accept-Language`.
//! - Redirects followed automatically (bounded).
//! - No timeout unless one is configured.

pub mod url;

use async_trait::async_trait;
use jobpost_core::{AppConfig, Error};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use std::time::{Duration, Instant};

pub use self::url::{UrlError, validate_url};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: desktop Chrome)
    pub user_agent: String,

    /// Accept header value
    pub accept: String,

    /// Accept-Language header value
    pub accept_language: String,

    /// Maximum number of redirects to follow (default: 10)
    pub max_redirects: usize,

    /// Optional request timeout (default: none)
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            accept: config.accept.clone(),
            accept_language: config.accept_language.clone(),
            max_redirects: config.max_redirects,
            timeout: config.timeout(),
        }
    }
}

/// Source of page HTML for the extraction pipeline.
///
/// [`FetchClient`] is the network implementation.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the document at `url` and return its body as text.
    async fn fetch_html(&self, url: &Url) -> Result<String, Error>;
}

/// HTTP client for job-posting pages.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: Client,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: &FetchConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, header_value("accept", &config.accept)?);
        headers.insert(header::ACCEPT_LANGUAGE, header_value("accept_language", &config.accept_language)?);

        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Fetch a URL and return its body decoded as text.
    ///
    /// Any non-success status is a terminal `FetchFailed` carrying that status.
    pub async fn fetch(&self, url: &Url) -> Result<String, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::transport(format!("network error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("fetch of {} failed with status {}", url, status);
            return Err(Error::status(status.as_u16()));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read response: {e}")))?;

        tracing::debug!(
            status = status.as_u16(),
            content_type = %content_type,
            fetch_ms = start.elapsed().as_millis() as u64,
            bytes = body.len(),
            "fetched {} -> {}",
            url,
            final_url
        );

        Ok(body)
    }
}

#[async_trait]
impl PageSource for FetchClient {
    async fn fetch_html(&self, url: &Url) -> Result<String, Error> {
        self.fetch(url).await
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidInput(format!("invalid {field} header: {e}")))
}
