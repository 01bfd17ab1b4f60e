//! Crawler module for blog listing and article pages
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - Platform detection
//! - Ordered selector chains for article nodes, fields and details
//! - Next-page resolution
//! - The bounded crawl loop

mod coordinator;
mod detail;
mod fetcher;
mod listing;
mod pagination;
mod platform;
pub mod selectors;

pub use coordinator::{CrawlReport, Crawler, StopReason, MAX_PAGES, POLITENESS_DELAY};
pub use detail::{fetch_details, parse_details, DetailResult};
pub use fetcher::{build_http_client, fetch_url, user_agent_string, FetchedPage, HttpFetcher, PageFetcher};
pub use listing::{extract_fields, extract_nodes};
pub use pagination::{next_page_url, NEXT_TEXT_TOKENS};
pub use platform::{detect_platform, site_title};

use crate::config::Config;
use crate::url::normalize_site_url;

/// Runs a complete crawl of one blog
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Normalize the site address into the base URL
/// 2. Build the HTTP client from the configuration
/// 3. Crawl listing pages and article details
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `site` - The blog address, with or without scheme
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The crawl ran (possibly ending early on a listing failure)
/// * `Err(FishcatError)` - The address was invalid, the client could not be
///   built, or the first listing page failed
pub async fn crawl(config: &Config, site: &str) -> crate::Result<CrawlReport> {
    let base_url = normalize_site_url(site).map_err(crate::CrawlError::from)?;
    let fetcher = HttpFetcher::from_config(config)?;
    let report = Crawler::new(fetcher).crawl(&base_url).await?;
    Ok(report)
}
