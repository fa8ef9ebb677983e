//! Error types for the NovelUpdates scraper
//!
//! This module defines all error types used throughout the library.
//! NovelUpdatesError implements Serialize so it can cross UI/IPC bridges as a string.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for NovelUpdates scraper operations
#[derive(Error, Debug)]
pub enum NovelUpdatesError {
    /// HTTP request failed (connection, DNS, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        /// Numeric status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Requested resource was not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Required HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// JSON rendering failed
    #[error("Failed to encode JSON: {0}")]
    EncodingError(#[from] serde_json::Error),

    /// Client configuration could not be turned into a request profile
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Search query was empty
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Series id is not a usable slug
    #[error("Invalid series id: {0:?}")]
    InvalidId(String),
}

impl NovelUpdatesError {
    /// True for connection failures and non-success HTTP statuses.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::HttpStatus { .. } | Self::NotFound(_)
        )
    }

    /// True when the page was fetched but could not be turned into a record.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::ElementNotFound(_))
    }
}

/// Serialize NovelUpdatesError as its display string
impl Serialize for NovelUpdatesError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for NovelUpdates scraper operations
pub type Result<T> = std::result::Result<T, NovelUpdatesError>;
