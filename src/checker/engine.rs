// src/checker/engine.rs
// =============================================================================
// The bounded-concurrency probe engine.
//
// How it works:
// 1. Admission: while fewer than `concurrency` probes are in flight and the
//    cursor has not reached the end of the worklist, start the next probe.
//    The cursor and the in-flight count move *before* the probe's result is
//    known.
// 2. Wait for whichever in-flight probe finishes first.
// 3. Completion: in-flight goes down, checked goes up, non-alive outcomes
//    become DeadLink records, and a progress marker is printed now and then.
// 4. Back to 1. A finished probe is what makes room for the next one, so the
//    pool stays full until the worklist runs dry.
// 5. Stop when the cursor is exhausted and nothing is in flight.
//
// All probes are futures polled by the one task running `run()`, through a
// FuturesUnordered. Nothing runs in parallel, so the scheduler state needs no
// lock: it is a plain local value mutated between awaits.
// =============================================================================

use super::http::{CheckOutcome, Prober};
use super::report::{CheckReport, DeadLink};
use super::{CheckerConfig, PROGRESS_EVERY};
use crate::tree::WorkItem;
use futures::stream::{FuturesUnordered, StreamExt};
use std::io::Write;
use tracing::{debug, info};

/// Drains a worklist through a prober with at most `concurrency` probes
/// outstanding at any time.
pub struct ProbeEngine<P> {
    prober: P,
    concurrency: usize,
    show_progress: bool,
}

// Mutable bookkeeping of one run
struct Scheduler {
    items: Vec<WorkItem>,
    cursor: usize,
    in_flight: usize,
    peak_in_flight: usize,
    checked: usize,
    dead_links: Vec<DeadLink>,
}

impl Scheduler {
    fn new(items: Vec<WorkItem>) -> Self {
        Self {
            items,
            cursor: 0,
            in_flight: 0,
            peak_in_flight: 0,
            checked: 0,
            dead_links: Vec::new(),
        }
    }

    fn total(&self) -> usize {
        self.items.len()
    }

    fn exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    fn finished(&self) -> bool {
        self.exhausted() && self.in_flight == 0
    }

    // Takes the next item off the worklist if the pool has room
    fn admit(&mut self, concurrency: usize) -> Option<WorkItem> {
        if self.in_flight >= concurrency || self.exhausted() {
            return None;
        }
        let item = self.items[self.cursor].clone();
        self.cursor += 1;
        self.in_flight += 1;
        self.peak_in_flight = self.peak_in_flight.max(self.in_flight);
        Some(item)
    }

    // Records one finished probe. Returns true if it was not alive.
    fn complete(&mut self, item: WorkItem, outcome: CheckOutcome) -> bool {
        self.in_flight -= 1;
        self.checked += 1;

        if outcome.is_alive() {
            return false;
        }
        debug!("{} [{}] is {}", item.name, item.url, outcome.reason());
        self.dead_links.push(DeadLink { item, outcome });
        true
    }

    fn into_report(self) -> CheckReport {
        CheckReport {
            total: self.items.len(),
            checked: self.checked,
            peak_in_flight: self.peak_in_flight,
            dead_links: self.dead_links,
        }
    }
}

impl<P: Prober> ProbeEngine<P> {
    pub fn new(prober: P, config: &CheckerConfig) -> Self {
        Self {
            prober,
            concurrency: config.concurrency.max(1),
            show_progress: config.show_progress,
        }
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    // Probes every item and returns the summary
    //
    // Dead links appear in the report in completion order, which is not
    // necessarily worklist order.
    pub async fn run(&self, items: Vec<WorkItem>) -> CheckReport {
        let mut state = Scheduler::new(items);
        let mut in_flight = FuturesUnordered::new();

        info!(
            "checking {} URLs with concurrency {}",
            state.total(),
            self.concurrency
        );

        loop {
            while let Some(item) = state.admit(self.concurrency) {
                let prober = &self.prober;
                in_flight.push(async move {
                    let outcome = prober.probe(&item.url).await;
                    (item, outcome)
                });
            }

            if state.finished() {
                break;
            }

            // Non-empty here: either something was just admitted or in_flight > 0
            let Some((item, outcome)) = in_flight.next().await else {
                break;
            };

            let dead = state.complete(item, outcome);
            if self.show_progress {
                let mut stdout = std::io::stdout().lock();
                print_progress(&mut stdout, dead, state.checked, state.total());
            }
        }

        info!(
            "checked {} URLs, {} dead or suspect (peak in flight: {})",
            state.checked,
            state.dead_links.len(),
            state.peak_in_flight
        );
        state.into_report()
    }
}

// `x` for every bad link, plus a " checked/total" counter every PROGRESS_EVERY
// completions. The counter ends in '\r' so the next one overwrites it.
fn print_progress(out: &mut impl Write, dead: bool, checked: usize, total: usize) {
    if dead {
        let _ = write!(out, "x");
    }
    if checked % PROGRESS_EVERY == 0 {
        let _ = write!(out, " {}/{}\r", checked, total);
    }
    let _ = out.flush();
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why FuturesUnordered instead of buffer_unordered?
//    - buffer_unordered(N) hides the cursor and the in-flight count
//    - Here the admission rule is written out, so peak_in_flight can be
//      measured and the termination check is explicit
//
// 2. Why no Mutex around the counters?
//    - Every probe future is polled by this one task; completions are handled
//      one at a time between awaits
//    - Spawning probes with tokio::spawn would change that and need a lock
//      (or a channel back to this loop)
//
// 3. What happens to a probe that times out?
//    - HttpProbe wraps the request in tokio::time::timeout; when the deadline
//      passes the request future is dropped, which closes its connection
// -----------------------------------------------------------------------------
