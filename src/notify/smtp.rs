// src/notify/smtp.rs
// =============================================================================
// Emails notifications with `lettre`.
//
// One authenticated STARTTLS session per notification, from the configured
// sender to the single configured recipient, as a plain-text message.
// Changes are rare compared to poll cycles, so no connection is kept open
// between sends.
// =============================================================================

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use super::Notifier;
use crate::config::EmailConfig;
use crate::errors::NotifyError;

pub struct SmtpNotifier {
    sender: Mailbox,
    recipient: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifier {
    pub fn new(config: &EmailConfig) -> Result<Self, NotifyError> {
        let sender: Mailbox = config
            .sender_email
            .parse()
            .map_err(|e| NotifyError::Address(format!("{}: {}", config.sender_email, e)))?;
        let recipient: Mailbox = config
            .recipient_email
            .parse()
            .map_err(|e| NotifyError::Address(format!("{}: {}", config.recipient_email, e)))?;

        let credentials = Credentials::new(
            config.sender_email.clone(),
            config.sender_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            sender,
            recipient,
            transport,
        })
    }

    fn build_message(&self, subject: &str, body: &str) -> Result<Message, NotifyError> {
        Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::Message(e.to_string()))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let message = self.build_message(subject, body)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        debug!(to = %self.recipient, "SMTP server accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SMTP_PORT;

    fn email_config(sender: &str) -> EmailConfig {
        EmailConfig {
            sender_email: sender.to_string(),
            sender_password: "secret".to_string(),
            recipient_email: "me@example.com".to_string(),
            smtp_server: "smtp.example.com".to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
        }
    }

    #[tokio::test]
    async fn test_invalid_sender_rejected() {
        let err = SmtpNotifier::new(&email_config("not-an-address")).err().unwrap();
        assert!(matches!(err, NotifyError::Address(_)));
    }

    #[tokio::test]
    async fn test_message_carries_subject_and_body() {
        let notifier = SmtpNotifier::new(&email_config("bot@example.com")).unwrap();

        let message = notifier
            .build_message("Update on https://example.com/a.txt", "  a\n- b\n+ x")
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Subject: Update on https://example.com/a.txt"));
        assert!(raw.contains("To: me@example.com"));
        assert!(raw.contains("+ x"));
    }
}
