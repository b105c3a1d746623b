// src/notify/dry_run.rs
// =============================================================================
// Notifier used with --dry-run.
//
// Writes each notification (subject and full diff) to the log at info level
// instead of sending it, so a config can be tried out without an SMTP
// account. Delivery never fails.
// =============================================================================

use async_trait::async_trait;
use tracing::info;

use super::Notifier;
use crate::errors::NotifyError;

/// Notifier that only logs. Never fails.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        info!(subject, "notification (dry run)\n{}", body);
        Ok(())
    }
}
