//! FishCat main entry point
//!
//! This is the command-line interface for the FishCat blog crawler.

use anyhow::Context;
use clap::Parser;
use fishcat::config::{load_config_or_default, validate};
use fishcat::crawler::crawl;
use fishcat::output::{export_all, print_crawl_summary, ExportFormat};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const BANNER: &str = r"
      /\___/\
     (  ・ω・)   _____ _     _      ____      _
     (  つ  )   |  ___(_)___| |__  / ___|__ _| |_
    (つ/￣)つ   | |_  | / __| '_ \| |   / _` | __|
     U￣U      |  _| | \__ \ | | | |__| (_| | |_
               |_|   |_|___/_| |_|\____\__,_|\__|
";

/// FishCat: crawl articles from WordPress and Typecho blogs
///
/// FishCat walks a blog's listing pages (up to 10), visits every article,
/// and exports title, date, category, body, tags and thumbnail.
#[derive(Parser, Debug)]
#[command(name = "fishcat")]
#[command(version)]
#[command(about = "Crawl articles from WordPress and Typecho blogs", long_about = None)]
struct Cli {
    /// Blog address (http:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Export format; repeat for several (csv, html, txt). Overrides the config
    #[arg(short, long = "format", value_name = "FORMAT")]
    formats: Vec<String>,

    /// Directory to write exports to. Overrides the config
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// File name prefix for exports. Overrides the config
    #[arg(short, long)]
    prefix: Option<String>,

    /// Crawl and print the summary without writing any files
    #[arg(long, conflicts_with_all = ["formats", "output_dir", "prefix"])]
    no_export: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Also append the log to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .as_deref()
        .map(open_log_file)
        .transpose()
        .context("Failed to open log file")?;
    setup_logging(cli.verbose, cli.quiet, log_file);

    let mut config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // Command-line overrides
    if !cli.formats.is_empty() {
        config.output.formats = cli.formats.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.display().to_string();
    }
    if let Some(prefix) = &cli.prefix {
        config.output.file_prefix = prefix.clone();
    }
    validate(&config).context("Invalid configuration")?;

    let formats = config
        .output
        .formats
        .iter()
        .map(|f| f.parse::<ExportFormat>())
        .collect::<Result<Vec<_>, _>>()?;

    if !cli.quiet {
        println!("{}", BANNER);
        println!("  FishCat v{}\n", env!("CARGO_PKG_VERSION"));
        println!("Start crawling: {}\n", cli.url);
    }

    tracing::info!("FishCat v{} starting", env!("CARGO_PKG_VERSION"));

    let report = crawl(&config, &cli.url)
        .await
        .with_context(|| format!("Crawl of {} failed", cli.url))?;

    if !cli.quiet {
        print_crawl_summary(&report);
    }

    if report.is_partial() {
        tracing::warn!(
            "Crawl ended early; exporting the {} articles collected so far",
            report.records.len()
        );
    }

    if cli.no_export || formats.is_empty() {
        return Ok(());
    }

    if report.records.is_empty() {
        tracing::warn!("No articles found, nothing to export");
        return Ok(());
    }

    let written = export_all(
        &report.records,
        &formats,
        Path::new(&config.output.directory),
        &config.output.file_prefix,
    )
    .context("Failed to export articles")?;

    if !cli.quiet {
        for path in written {
            println!("✓ Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// When `log_file` is given, the same events are also written to it without
/// ANSI colours.
fn setup_logging(verbose: u8, quiet: bool, log_file: Option<File>) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fishcat=info,warn"),
            1 => EnvFilter::new("fishcat=debug,info"),
            2 => EnvFilter::new("fishcat=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let file_layer = log_file.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false),
        )
        .with(file_layer)
        .init();
}

/// Opens `path` for appending, creating it if needed
fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_file_flag_parses() {
        let cli = Cli::try_parse_from(["fishcat", "--log-file", "crawl.log", "blog.example.com"])
            .unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("crawl.log")));
        assert_eq!(cli.url, "blog.example.com");

        let cli = Cli::try_parse_from(["fishcat", "blog.example.com"]).unwrap();
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fishcat.log");

        writeln!(open_log_file(&path).unwrap(), "first run").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second run").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first run\nsecond run\n");
    }

    #[test]
    fn test_open_log_file_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_log_file(&dir.path().join("missing/fishcat.log")).is_err());
    }
}
