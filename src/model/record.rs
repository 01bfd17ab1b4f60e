//! Article records and their sentinel defaults
//!
//! Every field of an `ArticleRecord` is always present. When a selector chain
//! finds nothing the field holds one of the sentinels below (or an empty
//! string), so exporters never deal with missing values.

/// Title used when no heading matches in a listing node
pub const UNTITLED: &str = "untitled";

/// Publication time used when no date element matches
pub const NO_DATE: &str = "no date";

/// Separator used when joining tags for output
pub const TAG_SEPARATOR: &str = ", ";

/// Fields extracted from one node of a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFields {
    /// Article title, or `UNTITLED`
    pub title: String,

    /// Publication time as rendered, or `NO_DATE`
    pub published_time: String,

    /// Category name (empty when absent)
    pub category: String,

    /// Absolute category link (empty when absent)
    pub category_link: String,

    /// Absolute article URL (empty when no link was found)
    pub article_url: String,
}

impl Default for ListingFields {
    fn default() -> Self {
        Self {
            title: UNTITLED.to_string(),
            published_time: NO_DATE.to_string(),
            category: String::new(),
            category_link: String::new(),
            article_url: String::new(),
        }
    }
}

/// Fields extracted from an article's detail page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDetails {
    /// Plain-text body
    pub content: String,

    /// Tags in page order
    pub tags: Vec<String>,

    /// Featured image URL
    pub thumbnail: String,
}

/// One extracted article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub title: String,
    pub published_time: String,
    pub category: String,
    pub category_link: String,
    pub article_url: String,
    pub content: String,
    pub tags: Vec<String>,
    pub thumbnail: String,
}

impl ArticleRecord {
    /// Merges listing fields with detail fields into one record
    pub fn from_parts(fields: ListingFields, details: ArticleDetails) -> Self {
        Self {
            title: fields.title,
            published_time: fields.published_time,
            category: fields.category,
            category_link: fields.category_link,
            article_url: fields.article_url,
            content: details.content,
            tags: details.tags,
            thumbnail: details.thumbnail,
        }
    }

    /// Returns the tags joined with `TAG_SEPARATOR`
    pub fn tags_joined(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }
}

impl Default for ArticleRecord {
    fn default() -> Self {
        Self::from_parts(ListingFields::default(), ArticleDetails::default())
    }
}
