//! HTML parsers for NovelUpdates pages
//!
//! This module contains parsers for extracting data from NovelUpdates HTML pages:
//! - `search`: Parse search results page
//! - `series`: Parse series detail page

pub mod search;
pub mod series;

use serde::Deserialize;

// Re-export main parsing functions
pub use search::{clean_search_rating, extract_series_id, parse_search_results};
pub use series::{group_url, parse_series_detail, strip_label};

/// How the `status`, `licensed` and `completely_translated` labels are cleaned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStrip {
    /// Drop one leading space, then one more leading character, whatever it
    /// is. Matches the values other NovelUpdates scrapers produce, but eats the
    /// first visible character when the page has less leading whitespace.
    #[default]
    Legacy,
    /// Trim surrounding whitespace.
    Trim,
}

/// How translator group page URLs are derived from group names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupSlug {
    /// Lowercase and drop every separator: "Foo Bar TL" -> `group/foobartl`.
    /// The site's real group slugs keep hyphens, so these URLs usually 404.
    #[default]
    Legacy,
    /// Lowercase with hyphen separators: "Foo Bar TL" -> `group/foo-bar-tl/`.
    Hyphenated,
}

/// Options for the series page parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub label_strip: LabelStrip,
    pub group_slug: GroupSlug,
}
