//! FishCat: a blog article crawler
//!
//! This crate crawls the paginated listing pages of WordPress and Typecho
//! blogs, follows each article link to its detail page, and assembles an
//! ordered list of article records that can be exported as CSV, HTML or
//! plain text.

pub mod config;
pub mod crawler;
pub mod model;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for FishCat operations
#[derive(Debug, Error)]
pub enum FishcatError {
    #[error("Crawl error: {0}")]
    Crawl(#[from] CrawlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Errors raised while retrieving a single page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("Page not found: {url}")]
    NotFound { url: String },
}

/// Crawl-level errors: the crawl could not produce any result at all
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] UrlError),

    #[error("Failed to fetch the first listing page: {0}")]
    FirstPage(FetchError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for FishCat operations
pub type Result<T> = std::result::Result<T, FishcatError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlReport, Crawler, StopReason};
pub use model::{ArticleRecord, Platform};
pub use self::url::{normalize_site_url, resolve_href};
