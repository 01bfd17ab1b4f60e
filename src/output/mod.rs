//! Output module for exporting crawled articles
//!
//! This module handles:
//! - Writing the article list as CSV, HTML or plain text
//! - Formatting the end-of-crawl summary

mod csv_output;
mod html;
pub mod stats;
mod text;
mod traits;

pub use csv_output::{write_csv, write_csv_to, CSV_HEADER};
pub use html::{format_html, write_html};
pub use stats::{format_crawl_summary, print_crawl_summary};
pub use text::{format_text, write_text};
pub use traits::{ExportFormat, OutputError, OutputResult};

use crate::model::ArticleRecord;
use std::path::{Path, PathBuf};

/// Writes one export file
///
/// The file is named `<prefix>.<extension>` inside `directory`.
pub fn export(
    records: &[ArticleRecord],
    format: ExportFormat,
    directory: &Path,
    prefix: &str,
) -> OutputResult<PathBuf> {
    let path = directory.join(format!("{}.{}", prefix, format.extension()));

    match format {
        ExportFormat::Csv => write_csv(records, &path)?,
        ExportFormat::Html => write_html(records, &path)?,
        ExportFormat::Txt => write_text(records, &path)?,
    }

    tracing::info!(
        "Exported {} articles to {} file: {}",
        records.len(),
        format.extension().to_uppercase(),
        path.display()
    );

    Ok(path)
}

/// Writes every requested format, skipping duplicates
///
/// Creates `directory` if it does not exist.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The files written, in request order
/// * `Err(OutputError)` - The first failure; earlier files stay on disk
pub fn export_all(
    records: &[ArticleRecord],
    formats: &[ExportFormat],
    directory: &Path,
    prefix: &str,
) -> OutputResult<Vec<PathBuf>> {
    std::fs::create_dir_all(directory)?;

    let mut written = Vec::new();
    let mut seen = Vec::new();
    for format in formats {
        if seen.contains(format) {
            continue;
        }
        seen.push(*format);
        written.push(export(records, *format, directory, prefix)?);
    }

    Ok(written)
}
