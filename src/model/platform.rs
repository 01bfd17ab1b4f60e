//! Blog engine variants recognised by the crawler
//!
//! The platform is decided once per crawl from the first listing page and
//! selects which selector chains are used for article nodes, detail bodies
//! and pagination.

use std::fmt;

/// The blog engine a site runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// WordPress; also the fallback when no generator signal is found
    #[default]
    WordPress,

    /// Typecho
    Typecho,
}

impl Platform {
    /// Lowercase identifier searched for in `<meta name="generator">` content
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WordPress => "wordpress",
            Self::Typecho => "typecho",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordPress => write!(f, "WordPress"),
            Self::Typecho => write!(f, "Typecho"),
        }
    }
}
