//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that drives every target through
//! fetch, extract and persist, including:
//! - Owning the visited set for the run
//! - Enforcing the depth limit
//! - Walking discovered links depth-first through an explicit worklist
//! - Applying the politeness pause between page requests

use crate::config::Config;
use crate::crawler::parser::parse_html;
use crate::crawler::throttle::{throttle_for, Throttle};
use crate::crawler::{build_http_client, fetch_url};
use crate::output::CrawlReport;
use crate::state::{PageState, VisitedSet};
use crate::storage::{fetch_and_save_css, FsStore, PageRecord, SiteStore};
use crate::GrabError;
use reqwest::Client;
use url::Url;

/// A URL waiting to be processed, with its distance from the start URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    pub url: String,
    pub depth: u32,
}

impl CrawlTarget {
    /// The start URL of a run, at depth 0
    pub fn root(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            depth: 0,
        }
    }

    /// A link discovered on this target's page
    pub fn child(&self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            depth: self.depth + 1,
        }
    }
}

/// Main crawler coordinator structure
pub struct Coordinator {
    client: Client,
    store: Box<dyn SiteStore>,
    throttle: Box<dyn Throttle>,
    max_depth: u32,
}

impl Coordinator {
    /// Creates a coordinator from configuration
    ///
    /// Builds the HTTP client, a filesystem store rooted at
    /// `<root-dir>/<netloc of start URL>` and a fixed-delay throttle.
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(GrabError)` - The start URL or client could not be set up
    pub fn new(config: &Config) -> Result<Self, GrabError> {
        let client = build_http_client(&config.user_agent)?;
        let store = FsStore::new(config.output_folder()?);

        Ok(Self::with_parts(
            client,
            Box::new(store),
            throttle_for(config.request_delay()),
            config.crawler.max_depth,
        ))
    }

    /// Creates a coordinator from explicit components
    pub fn with_parts(
        client: Client,
        store: Box<dyn SiteStore>,
        throttle: Box<dyn Throttle>,
        max_depth: u32,
    ) -> Self {
        Self {
            client,
            store,
            throttle,
            max_depth,
        }
    }

    /// Crawls from `start_url` with a fresh visited set
    pub async fn run(&mut self, start_url: &str) -> Result<CrawlReport, GrabError> {
        let mut visited = VisitedSet::new();
        self.crawl_from(start_url, &mut visited).await
    }

    /// Crawls from `start_url`, recording URLs in the caller's visited set
    ///
    /// URLs already in `visited` are skipped without any request or write,
    /// so running twice with the same set does nothing the second time.
    ///
    /// Targets are processed depth-first in link discovery order: children
    /// are pushed in reverse so the first link found is popped next, and
    /// every gate is checked when a target is popped.
    pub async fn crawl_from(
        &mut self,
        start_url: &str,
        visited: &mut VisitedSet,
    ) -> Result<CrawlReport, GrabError> {
        tracing::info!(
            "Starting crawl of {} (max depth {}) into {}",
            start_url,
            self.max_depth,
            self.store.folder().display()
        );

        let mut report = CrawlReport::new(self.store.folder().to_path_buf());
        let mut worklist = vec![CrawlTarget::root(start_url)];

        while let Some(target) = worklist.pop() {
            let state = self
                .process_target(&target, visited, &mut report, &mut worklist)
                .await?;
            debug_assert!(state.is_terminal());
            tracing::debug!("{} (depth {}) -> {}", target.url, target.depth, state);
            report.record(state);
        }

        report.visited_urls = visited.len();
        report.log_summary();

        Ok(report)
    }

    /// Runs one target through the gates and the fetch/extract/persist pipeline
    ///
    /// Returns the terminal state reached. Only storage failures are errors.
    async fn process_target(
        &mut self,
        target: &CrawlTarget,
        visited: &mut VisitedSet,
        report: &mut CrawlReport,
        worklist: &mut Vec<CrawlTarget>,
    ) -> Result<PageState, GrabError> {
        let mut state = PageState::Pending;

        if target.depth > self.max_depth {
            tracing::trace!("Skipping {}: depth {} exceeds max", target.url, target.depth);
            return Ok(PageState::DepthExceeded);
        }

        if visited.contains(&target.url) {
            tracing::trace!("Skipping {}: already visited", target.url);
            return Ok(PageState::AlreadyVisited);
        }

        // Marked before fetching so a failed URL is not retried in this run
        visited.insert(&target.url);

        self.pause_before(&target.url, report).await;
        report.pages_requested += 1;
        tracing::info!("Fetching {} (depth {})", target.url, target.depth);

        let content = match fetch_url(&self.client, &target.url).await {
            Ok(content) => content,
            Err(_) => return Ok(PageState::FetchFailed),
        };
        advance(&mut state, PageState::Fetched);

        let base_url = Url::parse(&target.url)?;
        let parsed = parse_html(&content, &base_url);
        let page = PageRecord {
            url: target.url.clone(),
            content,
            title: parsed.title,
            info: parsed.info,
        };
        advance(&mut state, PageState::Extracted);

        let saved = self.store.save_page(&page)?;
        report.saved_pages.push(saved);
        self.store.save_site_info(&page.info)?;
        let css =
            fetch_and_save_css(&self.client, self.store.as_ref(), &page.info.css_links).await?;
        report.record_stylesheets(css);
        advance(&mut state, PageState::Persisted);

        worklist.extend(
            page.info
                .links
                .iter()
                .rev()
                .map(|link| target.child(link.as_str())),
        );

        Ok(state)
    }

    /// Sleeps for the throttle's delay unless this is the run's first request
    async fn pause_before(&mut self, url: &str, report: &CrawlReport) {
        if report.pages_requested == 0 {
            return;
        }

        let delay = self.throttle.delay_before(url);
        if !delay.is_zero() {
            tracing::trace!("Waiting {:?} before {}", delay, url);
            tokio::time::sleep(delay).await;
        }
    }
}

fn advance(state: &mut PageState, next: PageState) {
    debug_assert!(
        state.can_transition_to(next),
        "invalid page state transition {} -> {}",
        state,
        next
    );
    *state = next;
}

/// Runs the main crawl operation
///
/// This function orchestrates the entire crawl process:
///
/// 1. Build the HTTP client and output store
/// 2. Create a fresh visited set
/// 3. Main crawl loop:
///    a. Pop the next target from the worklist
///    b. Skip it if too deep or already visited
///    c. Mark visited, pause, fetch
///    d. Extract title, metadata, links, stylesheets
///    e. Save the page, site info files and stylesheets
///    f. Push discovered links at depth + 1
/// 4. Return the run report
///
/// # Example
///
/// ```no_run
/// use site_grab::config::Config;
/// use site_grab::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(Config::default()).await?;
/// println!("{} pages saved", report.pages_saved());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlReport, GrabError> {
    let mut coordinator = Coordinator::new(&config)?;
    coordinator.run(&config.crawler.start_url).await
}
