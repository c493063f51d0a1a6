//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML parsing and link/metadata/stylesheet extraction
//! - The politeness pause between requests
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod throttle;

pub use coordinator::{run_crawl, Coordinator, CrawlTarget};
pub use fetcher::{build_http_client, fetch_url, FetchError};
pub use parser::{extract_site_info, page_title, parse_html, ParsedPage, SiteInfo};
pub use throttle::{throttle_for, FixedDelay, NoDelay, Throttle};

use crate::config::Config;
use crate::output::CrawlReport;
use crate::GrabError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Open the output folder for the start URL's host
/// 3. Fetch, extract and persist each page depth-first
/// 4. Return the counters for the run
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed; individual fetch failures are counted, not raised
/// * `Err(GrabError)` - Setup or filesystem failure
pub async fn crawl(config: Config) -> Result<CrawlReport, GrabError> {
    run_crawl(config).await
}
