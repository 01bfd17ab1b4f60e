//! Next-page resolution
//!
//! Strategies are tried in order and the first anchor that resolves to an
//! absolute URL wins. WordPress themes reliably mark the link with
//! `a.next.page-numbers`; Typecho themes vary, so three progressively looser
//! strategies follow the class lookup.

use crate::crawler::selectors::{element_text, ClassRule, Step};
use crate::model::Platform;
use crate::url::resolve_href;
use scraper::{ElementRef, Html};
use url::Url;

/// Visible texts that mark a "next page" anchor (matched as substrings of the
/// lower-cased anchor text)
pub const NEXT_TEXT_TOKENS: &[&str] = &["next", "下一页", "下页", ">", "»"];

const WORDPRESS_NEXT: Step = Step::Element {
    tags: &["a"],
    classes: ClassRule::AllOf(&["next", "page-numbers"]),
    href: true,
};

const TYPECHO_NEXT: Step = Step::Element {
    tags: &["a"],
    classes: ClassRule::OneOf(&["next", "page-next", "nav-next", "pagination-next"]),
    href: true,
};

const ANY_LINK: Step = Step::Element {
    tags: &["a"],
    classes: ClassRule::Any,
    href: true,
};

const WORDPRESS_STRATEGIES: &[NextLinkStrategy] = &[NextLinkStrategy::Class(WORDPRESS_NEXT)];

const TYPECHO_STRATEGIES: &[NextLinkStrategy] = &[
    NextLinkStrategy::Class(TYPECHO_NEXT),
    NextLinkStrategy::Text,
    NextLinkStrategy::PageNumber,
];

/// One way of locating the next-page anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextLinkStrategy {
    /// An anchor carrying a known "next" class combination
    Class(Step),

    /// An anchor whose text contains one of `NEXT_TEXT_TOKENS`
    Text,

    /// An anchor whose text is the number of the following page
    PageNumber,
}

impl NextLinkStrategy {
    /// Candidate anchors in document order
    fn candidates<'a>(&self, document: &'a Html, current_page: u32) -> Vec<ElementRef<'a>> {
        let root = document.root_element();
        match self {
            Self::Class(step) => step.find_all(root),
            Self::Text => ANY_LINK
                .find_all(root)
                .into_iter()
                .filter(|link| {
                    let text = element_text(link).to_lowercase();
                    NEXT_TEXT_TOKENS.iter().any(|token| text.contains(token))
                })
                .collect(),
            Self::PageNumber => {
                let wanted = u64::from(current_page) + 1;
                ANY_LINK
                    .find_all(root)
                    .into_iter()
                    .filter(|link| element_text(link).parse::<u64>().ok() == Some(wanted))
                    .collect()
            }
        }
    }
}

/// The ordered strategies for a platform
pub fn strategies(platform: Platform) -> &'static [NextLinkStrategy] {
    match platform {
        Platform::WordPress => WORDPRESS_STRATEGIES,
        Platform::Typecho => TYPECHO_STRATEGIES,
    }
}

/// Finds the absolute URL of the next listing page, if any
///
/// # Arguments
///
/// * `document` - The current listing page
/// * `platform` - The site's platform
/// * `current_page` - The 1-based number of the current listing page
/// * `base_url` - The crawl's base URL, used to resolve the href
///
/// # Returns
///
/// `None` when no strategy finds a followable anchor, which ends the crawl.
pub fn next_page_url(
    document: &Html,
    platform: Platform,
    current_page: u32,
    base_url: &Url,
) -> Option<Url> {
    strategies(platform).iter().find_map(|strategy| {
        strategy
            .candidates(document, current_page)
            .into_iter()
            .filter_map(|link| link.value().attr("href"))
            .filter_map(|href| resolve_href(href, base_url))
            .find_map(|absolute| Url::parse(&absolute).ok())
    })
}
