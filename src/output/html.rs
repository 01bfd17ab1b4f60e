//! HTML export
//!
//! Renders a standalone page with one card per article. All record text is
//! escaped; body newlines become `<br>`.

use crate::model::ArticleRecord;
use crate::output::traits::OutputResult;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::path::Path;

const STYLE: &str = "body { font-family: Arial, sans-serif; }
.article { margin-bottom: 2em; padding: 20px; border: 1px solid #ddd; border-radius: 5px; }
h2 { color: #333; margin-top: 0; }
img { max-width: 100%; height: auto; margin: 10px 0; }
.meta { color: #666; margin: 5px 0; }
.content { line-height: 1.6; }
";

/// Writes the records as an HTML document to `output_path`
pub fn write_html(records: &[ArticleRecord], output_path: &Path) -> OutputResult<()> {
    std::fs::write(output_path, format_html(records))?;
    Ok(())
}

/// Formats the records as an HTML document
pub fn format_html(records: &[ArticleRecord]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<title>Article Export</title>\n");
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    for record in records {
        push_article(&mut html, record);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_article(html: &mut String, record: &ArticleRecord) {
    html.push_str("<div class=\"article\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", encode_text(&record.title)));

    if !record.thumbnail.is_empty() {
        html.push_str("<div class=\"thumbnail\">\n");
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"thumbnail\" referrerpolicy=\"no-referrer\">\n",
            encode_double_quoted_attribute(&record.thumbnail)
        ));
        html.push_str("</div>\n");
    }

    let tags = record.tags_joined();
    for (label, value) in [
        ("Published", record.published_time.as_str()),
        ("Category", record.category.as_str()),
        ("Tags", tags.as_str()),
    ] {
        html.push_str(&format!(
            "<div class=\"meta\"><strong>{}:</strong> {}</div>\n",
            label,
            encode_text(value)
        ));
    }

    html.push_str("<div class=\"content\"><strong>Content:</strong></div>\n");
    html.push_str(&format!(
        "<div class=\"content\">{}</div>\n",
        encode_text(&record.content).replace('\n', "<br>")
    ));

    if !record.article_url.is_empty() {
        html.push_str(&format!(
            "<div class=\"meta\"><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View original</a></div>\n",
            encode_double_quoted_attribute(&record.article_url)
        ));
    }

    html.push_str("</div>\n");
}
