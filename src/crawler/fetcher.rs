//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made by the harvester:
//! - Building the HTTP client with the configured user agent and timeout
//! - Resolving list-page references and detail slugs against the base URL
//! - Classifying failures as transport, status, or decode errors
//!
//! There is no retry logic. A failed request is reported to the caller,
//! which decides whether it ends the crawl or just skips one commander.

use crate::config::{Config, SourceConfig, UserAgentConfig};
use crate::{FetchError, FetchResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Upper bound for a whole request, body included
///
/// # Example
///
/// ```no_run
/// use commander_harvest::config::UserAgentConfig;
/// use commander_harvest::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .user_agent(config.header_value())
        .default_headers(headers)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and parses the body as JSON
///
/// | Condition | Result |
/// |-----------|--------|
/// | Connection refused, DNS, TLS, timeout | `FetchError::Transport` |
/// | Non-2xx status | `FetchError::Status` |
/// | Body is not valid JSON | `FetchError::Decode` |
pub async fn fetch_json(client: &Client, url: &str) -> FetchResult<Value> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Client for the two catalog endpoints
///
/// Wraps the HTTP client together with the base URL that list-page
/// references and detail slugs are resolved against.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    detail_prefix: String,
}

impl CatalogClient {
    /// Creates a client from the full configuration
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let client = build_http_client(&config.user_agent, config.crawler.timeout())?;
        Self::with_client(client, &config.source)
    }

    /// Creates a catalog client around an existing HTTP client
    pub fn with_client(client: Client, source: &SourceConfig) -> crate::Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(&source.base_url)?,
            detail_prefix: source.detail_prefix.clone(),
        })
    }

    /// Resolves a list-page reference such as `commanders/year.json`
    pub fn page_url(&self, page_ref: &str) -> FetchResult<Url> {
        self.base_url
            .join(page_ref)
            .map_err(|source| FetchError::Url {
                reference: page_ref.to_string(),
                source,
            })
    }

    /// Resolves the detail page of one commander
    pub fn detail_url(&self, slug: &str) -> FetchResult<Url> {
        let reference = format!("{}{}.json", self.detail_prefix, slug);
        self.base_url
            .join(&reference)
            .map_err(|source| FetchError::Url { reference, source })
    }

    /// Fetches one page of the commander list
    pub async fn fetch_page(&self, page_ref: &str) -> FetchResult<Value> {
        let url = self.page_url(page_ref)?;
        fetch_json(&self.client, url.as_str()).await
    }

    /// Fetches the detail payload of one commander
    pub async fn fetch_detail(&self, slug: &str) -> FetchResult<Value> {
        let url = self.detail_url(slug)?;
        fetch_json(&self.client, url.as_str()).await
    }
}
