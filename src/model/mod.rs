//! Data model for extracted articles
//!
//! This module defines the values that flow out of a crawl:
//!
//! - `Platform`: the blog engine whose markup conventions drive extraction
//! - `ArticleRecord`: one extracted article, with sentinel defaults for absent fields

mod platform;
mod record;

// Re-export main types
pub use platform::Platform;
pub use record::{ArticleDetails, ArticleRecord, ListingFields, NO_DATE, TAG_SEPARATOR, UNTITLED};
