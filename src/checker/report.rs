// src/checker/report.rs
// =============================================================================
// Dead-link records and the end-of-run summary.
//
// The text form (Display) is what arf-check-links prints:
//
//   --- Check Complete ---
//   Total URLs: 3
//   Dead/Refused: 1
//
//   Potential Dead Links:
//   [DEAD] 404 - Some page
//       URL: https://example.com/gone
//       Path: Root > Docs
// =============================================================================

use super::http::CheckOutcome;
use crate::tree::WorkItem;
use serde::Serialize;
use std::fmt;

/// A WorkItem whose probe did not come back alive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadLink {
    #[serde(flatten)]
    pub item: WorkItem,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

impl DeadLink {
    // "404", the error text, or nothing (timeouts carry neither)
    fn detail(&self) -> String {
        match (self.outcome.code(), self.outcome.error()) {
            (Some(code), _) => code.to_string(),
            (None, Some(error)) => error.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Summary of one full run of the probe engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Size of the worklist
    pub total: usize,
    /// Probes that completed (equals `total` once the run is over)
    pub checked: usize,
    /// Highest number of probes that were in flight at the same time
    pub peak_in_flight: usize,
    pub dead_links: Vec<DeadLink>,
}

impl CheckReport {
    pub fn has_dead_links(&self) -> bool {
        !self.dead_links.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Check Complete ---")?;
        writeln!(f, "Total URLs: {}", self.total)?;
        writeln!(f, "Dead/Refused: {}", self.dead_links.len())?;

        if !self.has_dead_links() {
            return writeln!(f, "No broken links found!");
        }

        writeln!(f)?;
        writeln!(f, "Potential Dead Links:")?;
        for dead in &self.dead_links {
            writeln!(
                f,
                "[{}] {} - {}",
                dead.outcome.reason().to_uppercase(),
                dead.detail(),
                dead.item.name
            )?;
            writeln!(f, "    URL: {}", dead.item.url)?;
            writeln!(f, "    Path: {}", dead.item.path)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Note: Some \"dead\" links might just be blocking bots or have timeouts."
        )
    }
}
