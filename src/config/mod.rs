//! Configuration module for FishCat
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file the crawler runs on `Config::default()`.
//!
//! # Example
//!
//! ```no_run
//! use fishcat::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("fishcat.toml")).unwrap();
//! println!("Exporting with prefix: {}", config.output.file_prefix);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
pub use validation::validate;
