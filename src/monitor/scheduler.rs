// src/monitor/scheduler.rs
// =============================================================================
// The long-lived polling loop.
//
// run cycle -> sleep `interval` -> run cycle -> ...
//
// The sleep starts after the cycle finishes, so the effective period is
// interval + cycle duration. There is no jitter, backoff or shutdown hook:
// the loop ends when the process is killed.
// =============================================================================

use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::cycle::{CycleSummary, PollCycle};
use crate::snapshot::SnapshotStore;
use crate::types::Site;

pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Polls forever.
    pub async fn run(&self, cycle: &PollCycle<'_>, sites: &[Site], store: &mut SnapshotStore) {
        let mut iteration: u64 = 0;
        loop {
            iteration += 1;
            self.step(iteration, cycle, sites, store).await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Runs exactly `cycles` cycles, sleeping between them but not after the last.
    pub async fn run_cycles(
        &self,
        cycles: usize,
        cycle: &PollCycle<'_>,
        sites: &[Site],
        store: &mut SnapshotStore,
    ) -> Vec<CycleSummary> {
        let mut summaries = Vec::with_capacity(cycles);
        for i in 0..cycles {
            if i > 0 {
                tokio::time::sleep(self.interval).await;
            }
            summaries.push(self.step(i as u64 + 1, cycle, sites, store).await);
        }
        summaries
    }

    async fn step(
        &self,
        iteration: u64,
        cycle: &PollCycle<'_>,
        sites: &[Site],
        store: &mut SnapshotStore,
    ) -> CycleSummary {
        let started = Instant::now();
        let summary = cycle.run_once(sites, store).await;

        info!(
            iteration,
            elapsed_ms = started.elapsed().as_millis() as u64,
            sites_crawled = summary.sites_crawled,
            sites_failed = summary.sites_failed,
            files_fetched = summary.files_fetched,
            files_failed = summary.files_failed,
            changes = summary.changes,
            tracked = store.len(),
            next_in_secs = self.interval.as_secs(),
            "poll cycle finished"
        );
        if store.is_empty() {
            warn!("no files are being monitored; check that the sites are reachable and link to files");
        }

        summary
    }
}
