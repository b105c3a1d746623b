// src/notify/mod.rs
// =============================================================================
// Outbound change notifications.
//
// Implementations:
// - smtp: emails the notification (STARTTLS + login)
// - dry_run: writes it to the log instead (--dry-run)
// =============================================================================

mod dry_run;
mod smtp;

use async_trait::async_trait;

use crate::errors::NotifyError;

pub use dry_run::LogNotifier;
pub use smtp::SmtpNotifier;

/// Delivers one notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}
