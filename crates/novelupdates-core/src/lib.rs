//! NovelUpdates Scraper Core Library
//!
//! This crate provides a read-only client for novelupdates.com, a catalog
//! that only offers HTML.
//!
//! # Features
//! - Search for series by name
//! - Get series metadata (type, genres, tags, ratings, publishers, groups, ...)
//! - Browser-profile HTTP client that passes the site's bot filter
//! - JSON rendering with a configurable indent

pub mod client;
pub mod dom;
pub mod error;
pub mod json;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{BrowserProfile, ClientConfig, NovelUpdatesClient};
pub use error::{NovelUpdatesError, Result};
pub use json::to_json;
pub use parser::{GroupSlug, LabelStrip, ParseOptions};
pub use scraper::{NovelUpdatesScraper, ScraperConfig};
pub use types::{Link, RatingEntry, SearchResult, SeriesDetail, TaggedLink};
