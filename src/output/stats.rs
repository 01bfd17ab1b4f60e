//! Crawl summary reporting
//!
//! Turns a `CrawlReport` into the short human-readable summary printed at
//! the end of a run.

use crate::crawler::{CrawlReport, StopReason};

/// Formats the end-of-crawl summary
pub fn format_crawl_summary(report: &CrawlReport) -> String {
    let mut out = String::new();

    out.push_str("=== Crawl Summary ===\n\n");
    if let Some(title) = &report.site_title {
        out.push_str(&format!("  Site: {}\n", title));
    }
    out.push_str(&format!("  Platform: {}\n", report.platform));
    out.push_str(&format!("  Listing pages: {}\n", report.pages_crawled));
    out.push_str(&format!("  Articles: {}\n", report.records.len()));

    let with_details = report
        .records
        .iter()
        .filter(|r| !r.article_url.is_empty())
        .count()
        .saturating_sub(report.degraded_details);
    out.push_str(&format!(
        "  Details fetched: {} ({} failed)\n",
        with_details, report.degraded_details
    ));
    out.push_str(&format!("  Duration: {}s\n", report.duration_seconds()));

    let stop = match &report.stop_reason {
        StopReason::EndOfPagination => "end of pagination".to_string(),
        StopReason::PageLimit => "page limit reached".to_string(),
        StopReason::ListingFailed(e) => format!("listing page failed ({})", e),
    };
    out.push_str(&format!("  Stopped: {}\n", stop));

    out
}

/// Prints the end-of-crawl summary to stdout
pub fn print_crawl_summary(report: &CrawlReport) {
    println!("{}", format_crawl_summary(report));
}
