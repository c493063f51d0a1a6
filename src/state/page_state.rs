/// Page state definitions for tracking crawl progress
///
/// This module defines all states a crawl target can be in while the
/// controller processes it.
use std::fmt;

/// Represents the current state of a crawl target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Target has been taken off the worklist but nothing has happened yet
    Pending,

    /// Page body has been retrieved
    Fetched,

    /// Title, metadata, links and stylesheets have been extracted
    Extracted,

    // ===== Terminal Success States =====
    /// Page and site info were written to the output folder
    Persisted,

    // ===== Terminal Skip States =====
    /// Target is deeper than the configured maximum depth
    DepthExceeded,

    /// URL was already handled earlier in this run
    AlreadyVisited,

    // ===== Terminal Error States =====
    /// Page could not be fetched
    FetchFailed,
}

impl PageState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Returns true if this is an active state (target may still be processed)
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Fetched | Self::Extracted)
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Persisted)
    }

    /// Returns true if the target was skipped at a gate without any I/O
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::DepthExceeded | Self::AlreadyVisited)
    }

    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed)
    }

    /// Returns true if the pipeline may move from this state to `next`
    pub fn can_transition_to(&self, next: PageState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Fetched)
                | (Self::Pending, Self::DepthExceeded)
                | (Self::Pending, Self::AlreadyVisited)
                | (Self::Pending, Self::FetchFailed)
                | (Self::Fetched, Self::Extracted)
                | (Self::Extracted, Self::Persisted)
        )
    }

    /// Short label used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetched => "fetched",
            Self::Extracted => "extracted",
            Self::Persisted => "persisted",
            Self::DepthExceeded => "depth_exceeded",
            Self::AlreadyVisited => "already_visited",
            Self::FetchFailed => "fetch_failed",
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Pending,
            Self::Fetched,
            Self::Extracted,
            Self::Persisted,
            Self::DepthExceeded,
            Self::AlreadyVisited,
            Self::FetchFailed,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
