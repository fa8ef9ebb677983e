//! Main NovelUpdates scraper API
//!
//! This module provides the high-level API for scraping novelupdates.com.
//! It combines the HTTP client with parsers to provide a simple interface
//! for searching series and getting series details.

use serde::Deserialize;

use crate::client::{ClientConfig, NovelUpdatesClient};
use crate::error::{NovelUpdatesError, Result};
use crate::json;
use crate::parser::{parse_search_results, parse_series_detail, ParseOptions};
use crate::types::{SearchResult, SeriesDetail};

/// Complete scraper configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub client: ClientConfig,
    pub parse: ParseOptions,
}

/// Main scraper API for NovelUpdates
///
/// Stateless apart from its HTTP client: every call issues exactly one
/// request and returns freshly built records. Calls may run concurrently.
///
/// # Example
/// ```no_run
/// use novelupdates_core::NovelUpdatesScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = NovelUpdatesScraper::new()?;
///
///     let results = scraper.search("mushoku tensei").await?;
///     println!("Found {} results", results.len());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NovelUpdatesScraper {
    client: NovelUpdatesClient,
    options: ParseOptions,
}

impl NovelUpdatesScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ScraperConfig::default())
    }

    /// Create a new scraper from a full configuration.
    pub fn with_config(config: ScraperConfig) -> Result<Self> {
        let client = NovelUpdatesClient::with_config(config.client)?;
        Ok(Self {
            client,
            options: config.parse,
        })
    }

    /// Create a new scraper with a custom client.
    ///
    /// This is useful for testing or when you need custom client configuration.
    pub fn with_client(client: NovelUpdatesClient, options: ParseOptions) -> Self {
        Self { client, options }
    }

    /// Search for series by name.
    ///
    /// The query is percent-encoded before it is put in the URL, so names
    /// containing `&`, `#` or spaces search for what they say.
    ///
    /// # Arguments
    /// * `series_name` - Search query string
    ///
    /// # Returns
    /// * `Ok(Vec<SearchResult>)` with matching series, possibly empty
    /// * `Err(NovelUpdatesError::InvalidQuery)` if the query is empty or whitespace-only
    ///
    /// The name is trimmed before it is sent, and a blank name is rejected
    /// without a request instead of being sent as-is.
    ///
    /// # Example
    /// ```no_run
    /// use novelupdates_core::NovelUpdatesScraper;
    ///
    /// # async fn example() -> Result<(), novelupdates_core::NovelUpdatesError> {
    /// let scraper = NovelUpdatesScraper::new()?;
    /// for item in scraper.search("tensei").await? {
    ///     println!("{} ({})", item.title, item.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, series_name: &str) -> Result<Vec<SearchResult>> {
        let trimmed = series_name.trim();
        if trimmed.is_empty() {
            return Err(NovelUpdatesError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let path = format!("/?s={}", urlencoding::encode(trimmed));
        let html = self.client.fetch(&path).await?;
        parse_search_results(&html)
    }

    /// Search for series by name and render the results as JSON (indent 2).
    pub async fn search_json(&self, series_name: &str) -> Result<Vec<u8>> {
        let results = self.search(series_name).await?;
        json::to_json(&results, None)
    }

    /// Get detailed information about a series.
    ///
    /// # Arguments
    /// * `id` - Series slug, as found in [`SearchResult::id`]
    ///
    /// # Returns
    /// * `Ok(SeriesDetail)` with series information
    /// * `Err(NovelUpdatesError::InvalidId)` if `id` is not a plain slug
    /// * `Err(NovelUpdatesError::NotFound)` if the series doesn't exist
    ///
    /// # Example
    /// ```no_run
    /// use novelupdates_core::NovelUpdatesScraper;
    ///
    /// # async fn example() -> Result<(), novelupdates_core::NovelUpdatesError> {
    /// let scraper = NovelUpdatesScraper::new()?;
    /// let series = scraper.fetch_series("mushoku-tensei-ln").await?;
    /// println!("{} ({})", series.title, series.series_type.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_series(&self, id: &str) -> Result<SeriesDetail> {
        validate_id(id)?;

        let path = format!("/series/{}/", id);
        let html = self.client.fetch(&path).await?;
        parse_series_detail(&html, &self.options)
    }

    /// Get series details rendered as JSON (indent 2).
    pub async fn fetch_series_json(&self, id: &str) -> Result<Vec<u8>> {
        let detail = self.fetch_series(id).await?;
        json::to_json(&detail, None)
    }
}

/// Reject ids that would change the request path or query.
fn validate_id(id: &str) -> Result<()> {
    let bad = id.is_empty()
        || id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%' | '.'));
    if bad {
        return Err(NovelUpdatesError::InvalidId(id.to_string()));
    }
    Ok(())
}
