//! Listing page extraction
//!
//! This module locates the article nodes of a listing page and pulls the
//! per-article fields (title, time, category, link) out of each node. Every
//! lookup is an ordered selector chain; a chain that finds nothing produces
//! the field's sentinel value instead of an error.

use crate::crawler::selectors::{all_matches, element_text, first_match, ClassRule, Step};
use crate::model::{ListingFields, Platform, NO_DATE, UNTITLED};
use crate::url::resolve_href;
use scraper::{ElementRef, Html};
use url::Url;

const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

const WORDPRESS_NODES: &[Step] = &[
    Step::Element {
        tags: &["article"],
        classes: ClassRule::OneOf(&["post"]),
        href: false,
    },
    Step::Element {
        tags: &["article"],
        classes: ClassRule::Containing("post"),
        href: false,
    },
];

const TYPECHO_NODES: &[Step] = &[
    Step::Element {
        tags: &["article", "div"],
        classes: ClassRule::OneOf(&[
            "post",
            "type-post",
            "post-type-post",
            "post-item",
            "entry",
            "post-list-item",
            "blog-post",
            "article-item",
            "content-item",
        ]),
        href: false,
    },
    Step::Css("div.post, div.entry, article.post, article.entry"),
];

const TITLE_CHAIN: &[Step] = &[
    Step::Element {
        tags: HEADINGS,
        classes: ClassRule::OneOf(&[
            "post-title",
            "entry-title",
            "article-title",
            "title",
            "post-heading",
            "entry-heading",
        ]),
        href: false,
    },
    Step::Element {
        tags: HEADINGS,
        classes: ClassRule::Any,
        href: false,
    },
];

const TIME_CHAIN: &[Step] = &[Step::Element {
    tags: &["time", "div", "span"],
    classes: ClassRule::OneOf(&[
        "post-date",
        "date",
        "entry-date",
        "post-meta-date",
        "meta-date",
        "time",
    ]),
    href: false,
}];

const META_CONTAINER_CHAIN: &[Step] = &[Step::Element {
    tags: &["div", "span"],
    classes: ClassRule::OneOf(&[
        "post-meta",
        "entry-meta",
        "post-category",
        "entry-category",
        "meta",
        "post-info",
    ]),
    href: false,
}];

const CATEGORY_CHAIN: &[Step] = &[
    Step::Element {
        tags: &["a"],
        classes: ClassRule::Any,
        href: true,
    },
    Step::Element {
        tags: &["span", "div"],
        classes: ClassRule::OneOf(&["category", "cat"]),
        href: false,
    },
];

const LINK_CHAIN: &[Step] = &[
    Step::Element {
        tags: &["a"],
        classes: ClassRule::OneOf(&[
            "post-title-link",
            "entry-title-link",
            "post-link",
            "entry-link",
        ]),
        href: true,
    },
    Step::Element {
        tags: &["a"],
        classes: ClassRule::Any,
        href: true,
    },
];

/// Locates the article nodes of a listing page, in document order
///
/// The first strategy of the platform's chain that yields at least one node
/// wins; later strategies are not consulted.
pub fn extract_nodes(document: &Html, platform: Platform) -> Vec<ElementRef<'_>> {
    let chain = match platform {
        Platform::WordPress => WORDPRESS_NODES,
        Platform::Typecho => TYPECHO_NODES,
    };
    all_matches(document.root_element(), chain)
}

/// Extracts the listing-level fields of one article node
///
/// Each field has its own chain; absent fields take their sentinel values.
/// Links are resolved against `base_url`.
pub fn extract_fields(node: ElementRef<'_>, base_url: &Url) -> ListingFields {
    let title = first_match(node, TITLE_CHAIN)
        .map(|heading| element_text(&heading))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let published_time = first_match(node, TIME_CHAIN)
        .map(|time| element_text(&time))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_DATE.to_string());

    let (category, category_link) = extract_category(node, base_url);

    let article_url = first_match(node, LINK_CHAIN)
        .and_then(|link| link.value().attr("href"))
        .and_then(|href| resolve_href(href, base_url))
        .unwrap_or_default();

    ListingFields {
        title,
        published_time,
        category,
        category_link,
        article_url,
    }
}

/// Two-stage category lookup: find the metadata container first, then prefer
/// an anchor inside it over a plain category span/div
fn extract_category(node: ElementRef<'_>, base_url: &Url) -> (String, String) {
    let Some(meta) = first_match(node, META_CONTAINER_CHAIN) else {
        return (String::new(), String::new());
    };

    match first_match(meta, CATEGORY_CHAIN) {
        Some(category) => {
            let link = category
                .value()
                .attr("href")
                .and_then(|href| resolve_href(href, base_url))
                .unwrap_or_default();
            (element_text(&category), link)
        }
        None => (String::new(), String::new()),
    }
}
