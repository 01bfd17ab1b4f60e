//! Plain-text export

use crate::model::ArticleRecord;
use crate::output::traits::OutputResult;
use std::path::Path;

/// Width of the rule printed between articles
const RULE_WIDTH: usize = 50;

/// Writes the records as a plain-text report to `output_path`
pub fn write_text(records: &[ArticleRecord], output_path: &Path) -> OutputResult<()> {
    std::fs::write(output_path, format_text(records))?;
    Ok(())
}

/// Formats the records as a plain-text report
pub fn format_text(records: &[ArticleRecord]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut text = String::new();

    for record in records {
        text.push_str(&format!("Title: {}\n", record.title));
        text.push_str(&format!("Published: {}\n", record.published_time));
        text.push_str(&format!("Category: {}\n", record.category));
        text.push_str(&format!("Content:\n{}\n", record.content));
        text.push_str(&format!("\n{}\n", rule));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text() {
        let record = ArticleRecord {
            title: "Hello".to_string(),
            content: "Body".to_string(),
            ..ArticleRecord::default()
        };
        let text = format_text(&[record]);
        assert_eq!(
            text,
            format!(
                "Title: Hello\nPublished: no date\nCategory: \nContent:\nBody\n\n{}\n",
                "=".repeat(50)
            )
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_text(&[]), "");
    }
}
