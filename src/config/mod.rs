//! Configuration module
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and turns a validated configuration into the [`CrawlTarget`] a run
//! is built around.
//!
//! # Example
//!
//! ```no_run
//! use site_path_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawler will save at most {} pages", config.crawl.max_pages);
//! ```

mod parser;
mod target;
mod types;
mod validation;

// Re-export types
pub use target::CrawlTarget;
pub use types::{
    Config, CrawlSettings, HttpSettings, DEFAULT_DELAY_MS, DEFAULT_MAX_PAGES, DEFAULT_OUTPUT_DIR,
    DEFAULT_TIMEOUT_SECS,
};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::{validate, validate_settings};
