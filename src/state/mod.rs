//! State module for tracking crawl progress
//!
//! This module provides the per-run state of a crawl.
//!
//! # Components
//!
//! - `PageState`: Tracks the state of an individual crawl target (pending, fetched, persisted, skipped, ...)
//! - `VisitedSet`: The dedup ledger of URLs already handled in the current run

mod page_state;
mod visited;

// Re-export main types
pub use page_state::PageState;
pub use visited::VisitedSet;
