//! CSV export
//!
//! One row per article with a fixed column order.

use crate::model::ArticleRecord;
use crate::output::traits::OutputResult;
use std::io::Write;
use std::path::Path;

/// Column order of the CSV export
pub const CSV_HEADER: [&str; 8] = [
    "title",
    "time",
    "category",
    "category_link",
    "content",
    "tags",
    "thumbnail",
    "article_url",
];

/// Writes the records as CSV to `output_path`
pub fn write_csv(records: &[ArticleRecord], output_path: &Path) -> OutputResult<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv_to(records, file)
}

/// Writes the records as CSV to any writer
pub fn write_csv_to<W: Write>(records: &[ArticleRecord], writer: W) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(CSV_HEADER)?;

    for record in records {
        let tags = record.tags_joined();
        writer.write_record([
            record.title.as_str(),
            record.published_time.as_str(),
            record.category.as_str(),
            record.category_link.as_str(),
            record.content.as_str(),
            tags.as_str(),
            record.thumbnail.as_str(),
            record.article_url.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
