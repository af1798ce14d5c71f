// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - http: probes a single URL and classifies the answer
// - engine: keeps a bounded number of probes in flight until the worklist
//   is drained
// - report: the dead-link records and the final summary
//
// Typical use:
//   let probe = HttpProbe::new(&config)?;
//   let report = ProbeEngine::new(probe, &config).run(items).await;
// =============================================================================

mod engine;
mod http;
mod report;

use std::time::Duration;

pub use engine::ProbeEngine;
pub use http::{classify_status, request_target, sanitize_url, CheckOutcome, HttpProbe, Prober};
pub use report::{CheckReport, DeadLink};

/// How many probes may be in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// How long a single probe may take before it counts as a timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// A print-progress marker is emitted after this many completions.
pub const PROGRESS_EVERY: usize = 50;

/// Sent with every probe; plenty of sites refuse requests that do not look
/// like a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Settings for one link-checking run.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub concurrency: usize,
    pub timeout: Duration,
    pub user_agent: String,
    /// Print the `x` markers and the periodic `n/total` counter to stdout
    pub show_progress: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: BROWSER_USER_AGENT.to_string(),
            show_progress: false,
        }
    }
}

impl CheckerConfig {
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        // A pool of zero would never admit anything
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.concurrency, 10);
        assert_eq!(config.timeout, Duration::from_millis(5000));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        assert_eq!(CheckerConfig::default().with_concurrency(0).concurrency, 1);
    }
}
