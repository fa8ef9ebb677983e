//! Data types for the NovelUpdates scraper
//!
//! Records are plain data: built once per call, owned by the caller.
//! All types implement Serialize and Deserialize; JSON field names are the
//! snake_case Rust field names.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::json;

/// A named link, e.g. a genre, author or publisher page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A link carrying the site's hover description (genres and tags)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedLink {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// One row of the ratings breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    /// "Overall", then "5" down to "1"
    pub name: String,
    pub rating: String,
}

/// One card on a search results page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Series title
    pub title: String,
    /// Slug taken from `url`, usable with `fetch_series`
    pub id: String,
    /// Absolute URL of the series page
    pub url: String,
    /// Cover URL, empty when the site shows its placeholder
    pub image: String,
    /// Rating shown on the card, e.g. "4.5"
    pub search_rating: String,
    /// Short blurb and expanded blurb joined by a newline
    pub description: String,
    pub releases: String,
    pub update_freq: String,
    pub nu_readers: String,
    pub nu_reviews: String,
    pub last_updated: String,
    pub genres: Vec<Link>,
}

impl SearchResult {
    /// Render as JSON; see [`json::to_json`] for the indent rules.
    pub fn to_json(&self, indent: Option<i32>) -> Result<Vec<u8>> {
        json::to_json(self, indent)
    }
}

/// Metadata from a series page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDetail {
    pub title: String,
    pub image: String,
    /// Novel type, e.g. "Light Novel JP"
    #[serde(rename = "type")]
    pub series_type: Link,
    pub genre: Vec<TaggedLink>,
    pub tags: Vec<TaggedLink>,
    pub rating: Vec<RatingEntry>,
    pub language: Link,
    pub authors: Vec<Link>,
    pub artists: Vec<Link>,
    pub year: String,
    /// Status in country of origin
    pub status: String,
    pub licensed: String,
    pub completely_translated: String,
    pub original_publisher: Option<Link>,
    pub english_publisher: Option<Link>,
    pub release_freq: String,
    pub description: String,
    /// Alternative titles in page order
    pub associated_names: Vec<String>,
    /// Translator groups
    pub groups: Vec<Link>,
}

impl SeriesDetail {
    /// Render as JSON; see [`json::to_json`] for the indent rules.
    pub fn to_json(&self, indent: Option<i32>) -> Result<Vec<u8>> {
        json::to_json(self, indent)
    }
}
