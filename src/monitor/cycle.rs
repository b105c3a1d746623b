// src/monitor/cycle.rs
// =============================================================================
// One poll cycle: crawl every site, fetch every discovered file, compare it
// to its snapshot, notify on change.
//
// Isolation boundaries:
// - per site: a crawl failure skips the site, the next site still runs
// - per file: a fetch failure skips the file, no snapshot is touched
// - per notification: a failed send is logged and the snapshot is STILL
//   updated, so the next cycle compares against what is really online
//
// Nothing here returns an error; failures end up in the log and in the
// CycleSummary counters.
// =============================================================================

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::crawl::SiteCrawler;
use crate::diff::{detect, ChangeReport};
use crate::fetch::Fetcher;
use crate::notify::Notifier;
use crate::snapshot::SnapshotStore;
use crate::types::{FilePath, Site, SnapshotKey};

/// Counters for one cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    pub sites_crawled: usize,
    pub sites_failed: usize,
    pub files_fetched: usize,
    pub files_failed: usize,
    /// Files seen for the first time (stored, not reported).
    pub files_new: usize,
    pub changes: usize,
    pub notifications_sent: usize,
    pub notifications_failed: usize,
}

impl CycleSummary {
    pub fn has_failures(&self) -> bool {
        self.sites_failed > 0 || self.files_failed > 0 || self.notifications_failed > 0
    }
}

pub struct PollCycle<'a> {
    fetcher: &'a dyn Fetcher,
    notifier: &'a dyn Notifier,
}

impl<'a> PollCycle<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, notifier: &'a dyn Notifier) -> Self {
        Self { fetcher, notifier }
    }

    pub async fn run_once(&self, sites: &[Site], store: &mut SnapshotStore) -> CycleSummary {
        let mut summary = CycleSummary::default();
        let crawler = SiteCrawler::new(self.fetcher);

        for site in sites {
            let files = match crawler.crawl(site).await {
                Ok(files) => files,
                Err(e) => {
                    warn!(site = %site, error = %e, "crawl failed, skipping site this cycle");
                    summary.sites_failed += 1;
                    continue;
                }
            };

            summary.sites_crawled += 1;
            debug!(site = %site, files = files.len(), "discovered files");

            for path in files {
                self.check_file(site, path, store, &mut summary).await;
            }
        }

        summary
    }

    async fn check_file(
        &self,
        site: &Site,
        path: FilePath,
        store: &mut SnapshotStore,
        summary: &mut CycleSummary,
    ) {
        let key = SnapshotKey::new(site.clone(), path);

        let content = match self.fetcher.get(&key.url()).await {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %key, error = %e, "failed to fetch file");
                summary.files_failed += 1;
                return;
            }
        };
        summary.files_fetched += 1;

        if !store.contains(&key) {
            summary.files_new += 1;
            debug!(file = %key, "first observation");
        }

        if let Some(report) = detect(&key, store.get(&key), &content) {
            summary.changes += 1;
            info!(
                file = %key,
                added = report.added(),
                removed = report.removed(),
                "content changed"
            );

            let (subject, body) = notification(&report);
            match self.notifier.notify(&subject, &body).await {
                Ok(()) => {
                    summary.notifications_sent += 1;
                    info!(file = %key, "notification sent");
                }
                Err(e) => {
                    summary.notifications_failed += 1;
                    error!(file = %key, error = %e, "failed to send notification");
                }
            }
        }

        store.put(key, content);
    }
}

/// Subject and body of the email for one change.
pub fn notification(report: &ChangeReport) -> (String, String) {
    let subject = format!("Update on {}", report.key);
    let body = format!(
        "The contents of {} have changed.\n\nChanges:\n\n{}",
        report.key,
        report.render()
    );
    (subject, body)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does run_once return a summary instead of Result?
//    - Every failure is already handled where it happens (logged + counted)
//    - There is nothing left for the caller to decide, so no error type
//
// 2. Why `&'a dyn Fetcher` rather than a generic `F: Fetcher`?
//    - main picks the notifier at runtime (SMTP or dry run), so it is boxed
//    - Tests pass in-memory fakes through the same door
// -----------------------------------------------------------------------------
