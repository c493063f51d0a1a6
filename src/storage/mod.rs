//! Storage module for persisting crawl output
//!
//! This module handles everything the crawler writes to disk:
//! - One HTML file per visited page, named from its sanitized title
//! - The shared `metadata.txt`, `links.txt` and `css_files.txt` files,
//!   rewritten for every processed page
//! - Fetched stylesheet bodies under `css/`

mod fs;
mod stylesheets;
mod traits;

pub use fs::{save_content, save_site_info, FsStore};
pub use stylesheets::{fetch_and_save_css, CssOutcome};
pub use traits::{SiteStore, StorageError, StorageResult};

use crate::crawler::SiteInfo;
use crate::url::clean_filename;

/// File holding `key: value` metadata lines of the last processed page
pub const METADATA_FILE: &str = "metadata.txt";

/// File holding the link URLs of the last processed page
pub const LINKS_FILE: &str = "links.txt";

/// File holding the stylesheet URLs of the last processed page
pub const CSS_LIST_FILE: &str = "css_files.txt";

/// Subfolder holding fetched stylesheet bodies
pub const CSS_DIR: &str = "css";

/// Result of processing one URL
#[derive(Debug, Clone)]
pub struct PageRecord {
    pub url: String,
    pub content: String,
    pub title: String,
    pub info: SiteInfo,
}

impl PageRecord {
    /// Name of the HTML file this page is saved under
    pub fn filename(&self) -> String {
        format!("{}.html", clean_filename(&self.title))
    }
}
