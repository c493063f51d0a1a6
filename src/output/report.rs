//! Per-run crawl counters
//!
//! The coordinator records the terminal state of every target it pops off the
//! worklist, plus stylesheet outcomes, into a [`CrawlReport`].

use crate::state::PageState;
use crate::storage::CssOutcome;
use std::collections::HashMap;
use std::path::PathBuf;

/// Crawl run summary
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Folder the run wrote into
    pub output_folder: PathBuf,

    /// Count of targets by terminal state
    pub pages_by_state: HashMap<PageState, u64>,

    /// Number of page requests sent (successful or not)
    pub pages_requested: u64,

    /// HTML files written, in processing order
    pub saved_pages: Vec<PathBuf>,

    pub stylesheets_saved: u64,
    pub stylesheets_failed: u64,

    /// Distinct URLs in the visited set when the run ended
    pub visited_urls: usize,
}

impl CrawlReport {
    pub fn new(output_folder: PathBuf) -> Self {
        Self {
            output_folder,
            ..Self::default()
        }
    }

    /// Records the terminal state of one target
    pub fn record(&mut self, state: PageState) {
        *self.pages_by_state.entry(state).or_insert(0) += 1;
    }

    /// Adds the result of one page's stylesheet pass
    pub fn record_stylesheets(&mut self, outcome: CssOutcome) {
        self.stylesheets_saved += outcome.saved as u64;
        self.stylesheets_failed += outcome.failed as u64;
    }

    /// Number of targets that ended in `state`
    pub fn count(&self, state: PageState) -> u64 {
        self.pages_by_state.get(&state).copied().unwrap_or(0)
    }

    /// Total number of targets taken off the worklist
    pub fn targets_seen(&self) -> u64 {
        self.pages_by_state.values().sum()
    }

    pub fn pages_saved(&self) -> u64 {
        self.count_where(PageState::is_success)
    }

    pub fn fetch_failures(&self) -> u64 {
        self.count_where(PageState::is_error)
    }

    /// Targets dropped at the depth or visited gate
    pub fn targets_skipped(&self) -> u64 {
        self.count_where(PageState::is_skipped)
    }

    fn count_where(&self, pred: fn(&PageState) -> bool) -> u64 {
        self.pages_by_state
            .iter()
            .filter(|(state, _)| pred(*state))
            .map(|(_, count)| count)
            .sum()
    }

    /// Logs a one-line summary of the run
    pub fn log_summary(&self) {
        tracing::info!(
            "Crawl finished: {} pages saved, {} fetch failures, {} already visited, {} beyond max depth, {} stylesheets saved ({} failed)",
            self.pages_saved(),
            self.fetch_failures(),
            self.count(PageState::AlreadyVisited),
            self.count(PageState::DepthExceeded),
            self.stylesheets_saved,
            self.stylesheets_failed
        );
    }
}

/// Prints the report to stdout in a formatted manner
///
/// # Arguments
///
/// * `report` - The report to display
pub fn print_report(report: &CrawlReport) {
    println!("=== Crawl Report ===\n");

    println!("Output folder: {}", report.output_folder.display());
    println!();

    println!("Overview:");
    println!("  Targets considered: {}", report.targets_seen());
    println!("  Page requests sent: {}", report.pages_requested);
    println!("  Skipped at a gate: {}", report.targets_skipped());
    println!("  Distinct URLs visited: {}", report.visited_urls);
    println!();

    println!("Targets by State:");
    let mut state_counts: Vec<_> = report.pages_by_state.iter().collect();
    state_counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    for (state, count) in state_counts {
        println!("  {}: {}", state, count);
    }
    println!();

    println!(
        "Stylesheets: {} saved, {} failed",
        report.stylesheets_saved, report.stylesheets_failed
    );

    let success_rate = if report.pages_requested > 0 {
        (report.pages_saved() as f64 / report.pages_requested as f64) * 100.0
    } else {
        0.0
    };
    println!(
        "Success Rate: {:.1}% ({} / {} requested pages saved)",
        success_rate,
        report.pages_saved(),
        report.pages_requested
    );
}
