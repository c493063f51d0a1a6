//! Filesystem store
//!
//! Layout under the crawl folder:
//!
//! ```text
//! <folder>/
//!   <title>.html
//!   metadata.txt
//!   links.txt
//!   css_files.txt
//!   css/<stylesheet>
//! ```

use crate::crawler::SiteInfo;
use crate::storage::traits::{SiteStore, StorageError, StorageResult};
use crate::storage::{PageRecord, CSS_DIR, CSS_LIST_FILE, LINKS_FILE, METADATA_FILE};
use std::path::{Path, PathBuf};

/// Writes `content` to `folder/filename`, creating `folder` and its parents
///
/// An existing file is overwritten.
pub fn save_content(content: &str, folder: &Path, filename: &str) -> StorageResult<PathBuf> {
    create_dir(folder)?;

    let file_path = folder.join(filename);
    write_file(&file_path, content)?;
    tracing::info!("Saved content to {}", file_path.display());

    Ok(file_path)
}

/// Rewrites `metadata.txt`, `links.txt` and `css_files.txt` in `folder`
///
/// Metadata is written as `key: value` lines, links and stylesheets one URL
/// per line. Only the given page's data survives; earlier contents are lost.
pub fn save_site_info(folder: &Path, info: &SiteInfo) -> StorageResult<()> {
    create_dir(folder)?;

    let metadata: String = info
        .metadata
        .iter()
        .map(|(key, value)| format!("{}: {}\n", key, value))
        .collect();
    let metadata_path = folder.join(METADATA_FILE);
    write_file(&metadata_path, &metadata)?;
    tracing::info!("Saved metadata to {}", metadata_path.display());

    let links_path = folder.join(LINKS_FILE);
    write_file(&links_path, &one_per_line(&info.links))?;
    tracing::info!("Saved links to {}", links_path.display());

    let css_path = folder.join(CSS_LIST_FILE);
    write_file(&css_path, &one_per_line(&info.css_links))?;
    tracing::info!("Saved stylesheet list to {}", css_path.display());

    Ok(())
}

fn one_per_line(entries: &[String]) -> String {
    entries.iter().map(|entry| format!("{}\n", entry)).collect()
}

fn create_dir(path: &Path) -> StorageResult<()> {
    std::fs::create_dir_all(path).map_err(|source| StorageError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> StorageResult<()> {
    std::fs::write(path, content).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Store writing into a folder on the local filesystem
#[derive(Debug, Clone)]
pub struct FsStore {
    folder: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at `folder`; nothing is created until the first write
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    fn css_folder(&self) -> PathBuf {
        self.folder.join(CSS_DIR)
    }
}

impl SiteStore for FsStore {
    fn folder(&self) -> &Path {
        &self.folder
    }

    fn save_page(&self, page: &PageRecord) -> StorageResult<PathBuf> {
        tracing::debug!("Saving {} as {}", page.url, page.filename());
        save_content(&page.content, &self.folder, &page.filename())
    }

    fn save_site_info(&self, info: &SiteInfo) -> StorageResult<()> {
        save_site_info(&self.folder, info)
    }

    fn prepare_stylesheet_dir(&self) -> StorageResult<PathBuf> {
        let css_folder = self.css_folder();
        create_dir(&css_folder)?;
        Ok(css_folder)
    }

    fn save_stylesheet(&self, filename: &str, content: &str) -> StorageResult<PathBuf> {
        save_content(content, &self.css_folder(), filename)
    }
}
