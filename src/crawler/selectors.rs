//! Ordered selector chains
//!
//! Extraction never relies on a single lookup. Each field is located by a
//! chain of `Step`s that is evaluated in order; the first step that matches
//! wins and later steps are never consulted. Keeping the chains as plain data
//! makes their tie-break order visible and testable in isolation.

use scraper::{ElementRef, Selector};

/// Rule applied to an element's class tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRule {
    /// No class requirement
    Any,

    /// At least one class token equals one of the names
    OneOf(&'static [&'static str]),

    /// Every name is present among the class tokens
    AllOf(&'static [&'static str]),

    /// At least one class token contains the substring
    Containing(&'static str),
}

impl ClassRule {
    fn matches(&self, element: &ElementRef<'_>) -> bool {
        let mut classes = element.value().classes();
        match self {
            Self::Any => true,
            Self::OneOf(names) => classes.any(|class| names.contains(&class)),
            Self::AllOf(names) => {
                let tokens: Vec<&str> = classes.collect();
                names.iter().all(|name| tokens.contains(name))
            }
            Self::Containing(needle) => classes.any(|class| class.contains(needle)),
        }
    }
}

/// One strategy in a selector chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Descendant elements named one of `tags` (any name when empty) whose
    /// classes satisfy `classes`; with `href`, the element must carry an
    /// `href` attribute
    Element {
        tags: &'static [&'static str],
        classes: ClassRule,
        href: bool,
    },

    /// Descendant elements matching a CSS selector
    Css(&'static str),
}

impl Step {
    /// Returns true if `element` satisfies an `Element` step
    ///
    /// `Css` steps only apply through `find_all`/`find_first`.
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        match self {
            Self::Element {
                tags,
                classes,
                href,
            } => {
                let value = element.value();
                (tags.is_empty() || tags.contains(&value.name()))
                    && (!href || value.attr("href").is_some())
                    && classes.matches(element)
            }
            Self::Css(_) => false,
        }
    }

    /// All matching descendants of `scope`, in document order
    pub fn find_all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        match self {
            Self::Element { .. } => descendants(scope)
                .filter(|element| self.matches(element))
                .collect(),
            Self::Css(css) => match Selector::parse(css) {
                Ok(selector) => scope.select(&selector).collect(),
                Err(_) => {
                    tracing::warn!("Ignoring unparsable selector: {}", css);
                    Vec::new()
                }
            },
        }
    }

    /// The first matching descendant of `scope` in document order
    pub fn find_first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        match self {
            Self::Element { .. } => descendants(scope).find(|element| self.matches(element)),
            Self::Css(_) => self.find_all(scope).into_iter().next(),
        }
    }
}

/// Descendant elements of `scope`, excluding `scope` itself
fn descendants<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Evaluates `chain` in order and returns the first element found
pub fn first_match<'a>(scope: ElementRef<'a>, chain: &[Step]) -> Option<ElementRef<'a>> {
    chain.iter().find_map(|step| step.find_first(scope))
}

/// Evaluates `chain` in order and returns every element found by the first
/// step that matches anything
pub fn all_matches<'a>(scope: ElementRef<'a>, chain: &[Step]) -> Vec<ElementRef<'a>> {
    chain
        .iter()
        .map(|step| step.find_all(scope))
        .find(|found| !found.is_empty())
        .unwrap_or_default()
}

/// Trimmed text content of an element (all text nodes concatenated)
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const HEADINGS: &[&str] = &["h1", "h2", "h3"];

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", body))
    }

    #[test]
    fn test_one_of_matches_any_listed_class() {
        let html = doc(r#"<div class="x entry"></div><div class="other"></div>"#);
        let step = Step::Element {
            tags: &["div"],
            classes: ClassRule::OneOf(&["post", "entry"]),
            href: false,
        };
        assert_eq!(step.find_all(html.root_element()).len(), 1);
    }

    #[test]
    fn test_all_of_requires_every_class() {
        let html = doc(
            r#"<a class="next" href="/a">a</a><a class="page-numbers next" href="/b">b</a>"#,
        );
        let step = Step::Element {
            tags: &["a"],
            classes: ClassRule::AllOf(&["next", "page-numbers"]),
            href: false,
        };
        let found = step.find_first(html.root_element()).unwrap();
        assert_eq!(found.value().attr("href"), Some("/b"));
    }

    #[test]
    fn test_containing_matches_substring() {
        let html = doc(r#"<article class="hentry my-posts"></article><article class="page"></article>"#);
        let step = Step::Element {
            tags: &["article"],
            classes: ClassRule::Containing("post"),
            href: false,
        };
        assert_eq!(step.find_all(html.root_element()).len(), 1);
    }

    #[test]
    fn test_href_requirement() {
        let html = doc(r#"<a name="top">top</a><a href="/x">x</a>"#);
        let step = Step::Element {
            tags: &["a"],
            classes: ClassRule::Any,
            href: true,
        };
        let found = step.find_first(html.root_element()).unwrap();
        assert_eq!(element_text(&found), "x");
    }

    #[test]
    fn test_first_match_short_circuits_in_chain_order() {
        // The second step would match earlier in the document, but the first
        // step wins because it is consulted first.
        let html = doc(r#"<h2>Plain</h2><h3 class="entry-title">Tagged</h3>"#);
        let chain = [
            Step::Element {
                tags: HEADINGS,
                classes: ClassRule::OneOf(&["entry-title"]),
                href: false,
            },
            Step::Element {
                tags: HEADINGS,
                classes: ClassRule::Any,
                href: false,
            },
        ];
        let found = first_match(html.root_element(), &chain).unwrap();
        assert_eq!(element_text(&found), "Tagged");
    }

    #[test]
    fn test_all_matches_stops_at_first_productive_step() {
        let html = doc(r#"<div class="post">1</div><article class="entry">2</article><div class="post">3</div>"#);
        let chain = [
            Step::Element {
                tags: &["div"],
                classes: ClassRule::OneOf(&["post"]),
                href: false,
            },
            Step::Css("article.entry"),
        ];
        let found = all_matches(html.root_element(), &chain);
        let texts: Vec<String> = found.iter().map(element_text).collect();
        assert_eq!(texts, vec!["1", "3"]);
    }

    #[test]
    fn test_all_matches_falls_through_to_css() {
        let html = doc(r#"<article class="entry">A</article><div class="entry">B</div>"#);
        let chain = [
            Step::Element {
                tags: &["section"],
                classes: ClassRule::Any,
                href: false,
            },
            Step::Css("div.entry, article.entry"),
        ];
        let texts: Vec<String> = all_matches(html.root_element(), &chain)
            .iter()
            .map(element_text)
            .collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let html = doc("<p>nothing here</p>");
        let chain = [Step::Css("div.post")];
        assert!(all_matches(html.root_element(), &chain).is_empty());
        assert!(first_match(html.root_element(), &chain).is_none());
    }

    #[test]
    fn test_scope_itself_is_not_matched() {
        let html = doc(r#"<div class="post"><span>inner</span></div>"#);
        let outer = Step::Css("div.post").find_first(html.root_element()).unwrap();
        let step = Step::Element {
            tags: &["div"],
            classes: ClassRule::Any,
            href: false,
        };
        assert!(step.find_first(outer).is_none());
    }
}
