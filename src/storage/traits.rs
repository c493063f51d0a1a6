//! Storage traits and error types
//!
//! This module defines the trait interface for output stores and
//! associated error types.

use crate::crawler::SiteInfo;
use crate::storage::PageRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for output store implementations
///
/// A store owns one crawl's output folder. Every write replaces whatever was
/// at the target path.
pub trait SiteStore: Send + Sync {
    /// Root folder of this crawl's output
    fn folder(&self) -> &Path;

    /// Writes the page body as `<sanitized title>.html`
    fn save_page(&self, page: &PageRecord) -> StorageResult<PathBuf>;

    /// Rewrites the shared metadata, links and stylesheet list files
    fn save_site_info(&self, info: &SiteInfo) -> StorageResult<()>;

    /// Ensures the stylesheet folder exists and returns its path
    fn prepare_stylesheet_dir(&self) -> StorageResult<PathBuf>;

    /// Writes one stylesheet body into the stylesheet folder
    fn save_stylesheet(&self, filename: &str, content: &str) -> StorageResult<PathBuf>;
}
