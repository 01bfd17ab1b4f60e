//! Article detail extraction
//!
//! A detail fetch never aborts the crawl. Its outcome is a `DetailResult`:
//! either the details parsed from the page, or a degraded result carrying the
//! fetch error, whose details are all empty.

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::selectors::{element_text, first_match, ClassRule, Step};
use crate::model::{ArticleDetails, Platform};
use crate::FetchError;
use scraper::Html;
use url::Url;

const WORDPRESS_BODY: &[Step] = &[Step::Element {
    tags: &["div"],
    classes: ClassRule::OneOf(&["entry-content", "post-content"]),
    href: false,
}];

const TYPECHO_BODY: &[Step] = &[Step::Element {
    tags: &["div"],
    classes: ClassRule::OneOf(&["post-content", "entry-content", "post-body", "entry-body"]),
    href: false,
}];

const TAGS_CONTAINER: &[Step] = &[Step::Element {
    tags: &["div"],
    classes: ClassRule::OneOf(&["post-tags", "entry-tags"]),
    href: false,
}];

const TAG_LINK: Step = Step::Element {
    tags: &["a"],
    classes: ClassRule::Any,
    href: false,
};

const THUMBNAIL: &[Step] = &[Step::Element {
    tags: &["img"],
    classes: ClassRule::OneOf(&["wp-post-image"]),
    href: false,
}];

/// Outcome of one detail fetch
#[derive(Debug)]
pub enum DetailResult {
    /// The page was fetched and parsed
    Complete(ArticleDetails),

    /// The page could not be fetched; details are empty
    Degraded(FetchError),
}

impl DetailResult {
    /// Returns true if the fetch failed
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }

    /// The extracted details, or empty details for a degraded result
    pub fn into_details(self) -> ArticleDetails {
        match self {
            Self::Complete(details) => details,
            Self::Degraded(_) => ArticleDetails::default(),
        }
    }
}

/// Fetches an article's detail page and extracts body, tags and thumbnail
///
/// A `FetchError` is logged and returned as `DetailResult::Degraded`; it is
/// never propagated.
pub async fn fetch_details(
    fetcher: &dyn PageFetcher,
    article_url: &Url,
    platform: Platform,
) -> DetailResult {
    match fetcher.fetch(article_url).await {
        Ok(page) => {
            tracing::trace!(
                "Article page {} answered HTTP {} ({})",
                page.final_url,
                page.status_code,
                page.content_type
            );
            let document = Html::parse_document(&page.body);
            DetailResult::Complete(parse_details(&document, platform))
        }
        Err(e) => {
            tracing::warn!("Failed to fetch article details for {}: {}", article_url, e);
            DetailResult::Degraded(e)
        }
    }
}

/// Extracts the detail fields from a parsed article page
pub fn parse_details(document: &Html, platform: Platform) -> ArticleDetails {
    let root = document.root_element();

    let body_chain = match platform {
        Platform::WordPress => WORDPRESS_BODY,
        Platform::Typecho => TYPECHO_BODY,
    };

    // Text nodes are joined with newlines so paragraphs stay apart
    let content = first_match(root, body_chain)
        .map(|body| body.text().collect::<Vec<_>>().join("\n").trim().to_string())
        .unwrap_or_default();

    let tags: Vec<String> = first_match(root, TAGS_CONTAINER)
        .map(|container| {
            TAG_LINK
                .find_all(container)
                .iter()
                .map(element_text)
                .collect()
        })
        .unwrap_or_default();

    let thumbnail = first_match(root, THUMBNAIL)
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string)
        .unwrap_or_default();

    ArticleDetails {
        content,
        tags,
        thumbnail,
    }
}
