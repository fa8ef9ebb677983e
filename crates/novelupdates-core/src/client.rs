//! HTTP client for novelupdates.com
//!
//! NovelUpdates sits behind a bot filter that rejects bare HTTP clients, so
//! every request carries a pinned desktop browser profile: User-Agent, the
//! usual Accept headers and the Sec-CH-* client hints Chrome sends.
//! Compression (gzip, deflate, br) is negotiated and decoded by reqwest.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use serde::Deserialize;

use crate::error::{NovelUpdatesError, Result};

/// Base URL for NovelUpdates
pub const NOVELUPDATES_BASE_URL: &str = "https://novelupdates.com";

/// Request headers that make the client look like a desktop browser.
///
/// The defaults pin a current Chrome on Windows. When the site's
/// fingerprinting changes, swap the profile through [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrowserProfile {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub sec_ch_ua: String,
    pub sec_ch_ua_mobile: String,
    pub sec_ch_ua_platform: String,
}

impl Default for BrowserProfile {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36".to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7".to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            sec_ch_ua: "\"Chromium\";v=\"130\", \"Google Chrome\";v=\"130\", \"Not?A_Brand\";v=\"99\"".to_string(),
            sec_ch_ua_mobile: "?0".to_string(),
            sec_ch_ua_platform: "\"Windows\"".to_string(),
        }
    }
}

impl BrowserProfile {
    /// Build the default header set sent with every request.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if a profile value is not a valid header value.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value("accept", &self.accept)?);
        headers.insert(
            ACCEPT_LANGUAGE,
            header_value("accept_language", &self.accept_language)?,
        );
        headers.insert(
            HeaderName::from_static("sec-ch-ua"),
            header_value("sec_ch_ua", &self.sec_ch_ua)?,
        );
        headers.insert(
            HeaderName::from_static("sec-ch-ua-mobile"),
            header_value("sec_ch_ua_mobile", &self.sec_ch_ua_mobile)?,
        );
        headers.insert(
            HeaderName::from_static("sec-ch-ua-platform"),
            header_value("sec_ch_ua_platform", &self.sec_ch_ua_platform)?,
        );
        headers.insert(
            HeaderName::from_static("sec-fetch-dest"),
            HeaderValue::from_static("document"),
        );
        headers.insert(
            HeaderName::from_static("sec-fetch-mode"),
            HeaderValue::from_static("navigate"),
        );
        headers.insert(
            HeaderName::from_static("sec-fetch-site"),
            HeaderValue::from_static("none"),
        );
        headers.insert(
            HeaderName::from_static("sec-fetch-user"),
            HeaderValue::from_static("?1"),
        );
        headers.insert(
            HeaderName::from_static("upgrade-insecure-requests"),
            HeaderValue::from_static("1"),
        );
        Ok(headers)
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| NovelUpdatesError::InvalidConfig(format!("{}: {}", field, e)))
}

/// Configuration for the NovelUpdates HTTP client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Site root requests are resolved against (default: https://novelupdates.com)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Browser profile used for impersonation
    pub profile: BrowserProfile,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: NOVELUPDATES_BASE_URL.to_string(),
            timeout_secs: 30,
            profile: BrowserProfile::default(),
        }
    }
}

/// HTTP client for NovelUpdates
///
/// Issues exactly one GET per call: redirects are followed, non-success
/// statuses become errors, nothing is retried.
#[derive(Debug, Clone)]
pub struct NovelUpdatesClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Site root without a trailing slash
    base_url: String,
}

impl NovelUpdatesClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the browser profile holds invalid header values
    /// or the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.profile.user_agent.as_str())
            .default_headers(config.profile.headers()?)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site root this client resolves paths against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a path relative to the base URL and return the response body.
    ///
    /// # Arguments
    /// * `path` - Path starting with `/`, query string included
    ///
    /// # Errors
    /// * `HttpError` - Network or TLS failure
    /// * `NotFound` - Server returned 404
    /// * `HttpStatus` - Any other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        self.get(&url).await
    }

    /// Fetch an absolute URL and return the response body.
    pub async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "response received");
            return Ok(body);
        }

        tracing::warn!(url, status = status.as_u16(), "NovelUpdates returned an error status");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(NovelUpdatesError::NotFound(url.to_string()));
        }

        Err(NovelUpdatesError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}
