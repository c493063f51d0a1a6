//! Politeness policy applied between page requests
//!
//! The coordinator asks its [`Throttle`] how long to wait before each page
//! request after the first one of a run, then sleeps for that long. Swapping
//! the policy (token bucket, per-domain delays) does not touch traversal.

use std::time::Duration;

/// Decides the pause before the next page request
pub trait Throttle: Send {
    /// Returns how long to wait before requesting `url`
    fn delay_before(&mut self, url: &str) -> Duration;
}

/// Waits the same fixed duration before every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Throttle for FixedDelay {
    fn delay_before(&mut self, _url: &str) -> Duration {
        self.delay
    }
}

/// Never waits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl Throttle for NoDelay {
    fn delay_before(&mut self, _url: &str) -> Duration {
        Duration::ZERO
    }
}

/// Builds the policy for a configured delay; zero means no pause at all
pub fn throttle_for(delay: Duration) -> Box<dyn Throttle> {
    if delay.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay::new(delay))
    }
}
