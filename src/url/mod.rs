//! URL handling module for FishCat
//!
//! This module turns user input into the crawl's base URL and resolves the
//! relative links found in listing and detail pages against it.

mod normalize;

// Re-export main functions
pub use normalize::{normalize_site_url, resolve_href};
