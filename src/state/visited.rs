use crate::url::visit_key;
use std::collections::HashSet;

/// Set of normalized URLs already handled in one crawl run
///
/// The set only grows. A fresh set is created for every run; nothing is
/// carried over between runs.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Creates an empty visited set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the URL (after normalization) has been marked
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(&visit_key(url))
    }

    /// Marks a URL as visited
    ///
    /// Returns true if the URL was not already present.
    pub fn insert(&mut self, url: &str) -> bool {
        self.urls.insert(visit_key(url))
    }

    /// Number of distinct URLs marked so far
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
