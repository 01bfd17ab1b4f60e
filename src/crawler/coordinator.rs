//! Crawl orchestration
//!
//! This module contains the bounded crawl loop:
//! - Fetching listing pages one at a time, starting at the base URL
//! - Detecting the platform on the first page
//! - Extracting article fields and fetching each article's detail page
//! - Following the next-page link until pagination ends or `MAX_PAGES` is hit
//!
//! Listing failures on the first page abort the crawl; later listing failures
//! stop it with the records collected so far. Detail failures only degrade the
//! affected article.

use crate::crawler::detail::fetch_details;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::listing::{extract_fields, extract_nodes};
use crate::crawler::pagination::next_page_url;
use crate::crawler::platform::{detect_platform, site_title};
use crate::model::{ArticleDetails, ArticleRecord, ListingFields, Platform};
use crate::{CrawlError, FetchError};
use chrono::{DateTime, Utc};
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Maximum number of listing pages fetched in one crawl
pub const MAX_PAGES: u32 = 10;

/// Pause after every article detail fetch
pub const POLITENESS_DELAY: Duration = Duration::from_secs(1);

/// Why a crawl ended
#[derive(Debug)]
pub enum StopReason {
    /// The last listing page had no next-page link
    EndOfPagination,

    /// `MAX_PAGES` listing pages were processed and another was available
    PageLimit,

    /// A listing page after the first could not be fetched
    ListingFailed(FetchError),
}

/// Result of a crawl
#[derive(Debug)]
pub struct CrawlReport {
    /// Extracted articles, in listing order
    pub records: Vec<ArticleRecord>,

    /// Platform detected on the first page
    pub platform: Platform,

    /// `<title>` of the first page
    pub site_title: Option<String>,

    /// Number of listing pages processed
    pub pages_crawled: u32,

    /// Number of articles whose detail page could not be fetched
    pub degraded_details: usize,

    /// Why the crawl ended
    pub stop_reason: StopReason,

    /// When the first listing fetch was issued
    pub started_at: DateTime<Utc>,

    /// When the crawl loop ended
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Wall-clock duration of the crawl in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Returns true if the crawl ended because a listing page failed
    pub fn is_partial(&self) -> bool {
        matches!(self.stop_reason, StopReason::ListingFailed(_))
    }
}

/// State owned by one crawl
struct CrawlState {
    base_url: Url,
    current_page_url: Url,
    page_number: u32,
    platform: Platform,
    site_title: Option<String>,
    records: Vec<ArticleRecord>,
    degraded_details: usize,
}

impl CrawlState {
    fn new(base_url: Url) -> Self {
        Self {
            current_page_url: base_url.clone(),
            base_url,
            page_number: 1,
            platform: Platform::default(),
            site_title: None,
            records: Vec::new(),
            degraded_details: 0,
        }
    }
}

/// Articles and next link read from one listing page
struct ListingPage {
    entries: Vec<ListingFields>,
    next_page: Option<Url>,
}

/// Runs crawls against a `PageFetcher`
pub struct Crawler {
    fetcher: Box<dyn PageFetcher>,
}

impl Crawler {
    /// Creates a crawler that fetches pages through `fetcher`
    pub fn new(fetcher: impl PageFetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
        }
    }

    /// Crawls the blog at `base_url`
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - The crawl ran; `stop_reason` says how it ended
    /// * `Err(CrawlError::FirstPage)` - The first listing page could not be fetched
    pub async fn crawl(&self, base_url: &Url) -> Result<CrawlReport, CrawlError> {
        let started_at = Utc::now();
        let mut state = CrawlState::new(base_url.clone());

        let stop_reason = loop {
            tracing::info!(
                "Processing page {}: {}",
                state.page_number,
                state.current_page_url
            );

            let page = match self.fetcher.fetch(&state.current_page_url).await {
                Ok(page) => page,
                Err(e) if state.page_number == 1 => {
                    tracing::error!("Crawl failed: {}", e);
                    return Err(CrawlError::FirstPage(e));
                }
                Err(e) => {
                    tracing::error!(
                        "Stopping at page {} with {} articles: {}",
                        state.page_number,
                        state.records.len(),
                        e
                    );
                    break StopReason::ListingFailed(e);
                }
            };

            tracing::debug!(
                "Listing page {} answered HTTP {} ({}) from {}",
                state.page_number,
                page.status_code,
                page.content_type,
                page.final_url
            );

            let listing = read_listing(&page.body, &mut state);
            self.collect_articles(listing.entries, &mut state).await;

            match listing.next_page {
                None => {
                    tracing::info!("No next page after page {}", state.page_number);
                    break StopReason::EndOfPagination;
                }
                Some(_) if state.page_number >= MAX_PAGES => {
                    tracing::info!("Reached the page limit of {}", MAX_PAGES);
                    break StopReason::PageLimit;
                }
                Some(next) => {
                    state.current_page_url = next;
                    state.page_number += 1;
                }
            }
        };

        let pages_crawled = match stop_reason {
            StopReason::ListingFailed(_) => state.page_number - 1,
            _ => state.page_number,
        };

        tracing::info!("Crawled {} articles", state.records.len());

        Ok(CrawlReport {
            records: state.records,
            platform: state.platform,
            site_title: state.site_title,
            pages_crawled,
            degraded_details: state.degraded_details,
            stop_reason,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Fetches details for each entry and appends the merged records
    async fn collect_articles(&self, entries: Vec<ListingFields>, state: &mut CrawlState) {
        for fields in entries {
            let details = match Url::parse(&fields.article_url) {
                Ok(article_url) => {
                    let result = fetch_details(self.fetcher.as_ref(), &article_url, state.platform).await;
                    if result.is_degraded() {
                        state.degraded_details += 1;
                    }
                    tokio::time::sleep(POLITENESS_DELAY).await;
                    result.into_details()
                }
                Err(_) => ArticleDetails::default(),
            };

            let record = ArticleRecord::from_parts(fields, details);
            tracing::info!(
                "Article {}: {} | {} | {}",
                state.records.len() + 1,
                record.title,
                record.published_time,
                record.category
            );
            state.records.push(record);
        }
    }
}

/// Parses a listing page and reduces it to owned entries and the next link
///
/// The document never outlives this call, so nothing borrowed from it is
/// held across a detail fetch.
fn read_listing(body: &str, state: &mut CrawlState) -> ListingPage {
    let document = Html::parse_document(body);

    if state.page_number == 1 {
        state.site_title = site_title(&document);
        if let Some(title) = &state.site_title {
            tracing::info!("Site title: {}", title);
        }
        state.platform = detect_platform(&document);
        tracing::info!("Detected platform: {}", state.platform);
    }

    let entries: Vec<ListingFields> = extract_nodes(&document, state.platform)
        .into_iter()
        .map(|node| extract_fields(node, &state.base_url))
        .collect();

    tracing::info!("Found {} articles", entries.len());
    let with_links = entries.iter().filter(|e| !e.article_url.is_empty()).count();
    tracing::info!(
        "Crawling, estimated {} seconds...",
        with_links as u64 * POLITENESS_DELAY.as_secs()
    );

    let next_page = next_page_url(&document, state.platform, state.page_number, &state.base_url);

    ListingPage { entries, next_page }
}
