//! Configuration module for site-grab
//!
//! This module handles loading, parsing, and validating configuration. Values
//! come from an optional TOML file, then the environment (`SCRAPING_URL`),
//! then command-line overrides applied by the binary.
//!
//! # Example
//!
//! ```no_run
//! use site_grab::config::resolve_config;
//! use std::path::Path;
//!
//! let config = resolve_config(Some(Path::new("site-grab.toml")), |_| None, |_| {}).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_MAX_DEPTH, DEFAULT_START_URL,
};

// Re-export parser functions
pub use parser::{apply_env_overrides, resolve_config, START_URL_ENV};
pub use validation::validate;
