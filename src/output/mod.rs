//! Output module for run reporting
//!
//! This module handles:
//! - Counting what happened to every crawl target in a run
//! - Printing the end-of-run summary

mod report;

pub use report::{print_report, CrawlReport};
