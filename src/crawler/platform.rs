//! Blog platform detection
//!
//! The platform is read from the `<meta name="generator">` tags of the first
//! listing page. WordPress takes priority over Typecho, and WordPress is also
//! the answer when no generator mentions either engine.

use crate::crawler::selectors::{element_text, Step};
use crate::model::Platform;
use scraper::Html;

/// Platforms in detection priority order
const DETECTION_ORDER: [Platform; 2] = [Platform::WordPress, Platform::Typecho];

const GENERATOR_META: Step = Step::Css(r#"meta[name="generator"][content]"#);
const TITLE: Step = Step::Css("title");

/// Classifies the site behind `document`
///
/// Every generator tag is considered; a signal earlier in the priority list
/// wins even when it appears in a later tag.
pub fn detect_platform(document: &Html) -> Platform {
    let generators: Vec<String> = GENERATOR_META
        .find_all(document.root_element())
        .iter()
        .filter_map(|meta| meta.value().attr("content"))
        .map(str::to_lowercase)
        .collect();

    DETECTION_ORDER
        .into_iter()
        .find(|platform| {
            generators
                .iter()
                .any(|content| content.contains(platform.as_str()))
        })
        .unwrap_or_default()
}

/// The page's `<title>`, if present and non-empty
pub fn site_title(document: &Html) -> Option<String> {
    TITLE
        .find_first(document.root_element())
        .map(|title| element_text(&title))
        .filter(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(head: &str) -> Html {
        Html::parse_document(&format!(
            "<html><head>{}</head><body></body></html>",
            head
        ))
    }

    #[test]
    fn test_detect_wordpress() {
        let html = page(r#"<meta name="generator" content="WordPress 6.4.2">"#);
        assert_eq!(detect_platform(&html), Platform::WordPress);
    }

    #[test]
    fn test_detect_typecho_case_insensitive() {
        let html = page(r#"<meta name="generator" content="TYPECHO 1.2.1">"#);
        assert_eq!(detect_platform(&html), Platform::Typecho);
    }

    #[test]
    fn test_missing_generator_defaults_to_wordpress() {
        let html = page("<title>Blog</title>");
        assert_eq!(detect_platform(&html), Platform::WordPress);
    }

    #[test]
    fn test_unknown_generator_defaults_to_wordpress() {
        let html = page(r#"<meta name="generator" content="Hugo 0.120">"#);
        assert_eq!(detect_platform(&html), Platform::WordPress);
    }

    #[test]
    fn test_wordpress_wins_when_both_present() {
        let html = page(
            r#"<meta name="generator" content="Typecho 1.2">
               <meta name="generator" content="WordPress 6.0">"#,
        );
        assert_eq!(detect_platform(&html), Platform::WordPress);
    }

    #[test]
    fn test_other_meta_tags_are_ignored() {
        let html = page(r#"<meta name="description" content="a typecho theme demo">"#);
        assert_eq!(detect_platform(&html), Platform::WordPress);
    }

    #[test]
    fn test_generator_matched_by_identifier_substring() {
        let html = page(r#"<meta name="generator" content="Powered by typecho-theme">"#);
        assert_eq!(detect_platform(&html), Platform::Typecho);
    }

    #[test]
    fn test_site_title() {
        let html = page("<title>  My Blog  </title>");
        assert_eq!(site_title(&html), Some("My Blog".to_string()));
        assert_eq!(site_title(&page("")), None);
    }
}
