use async_trait::async_trait;
use sf_core::services::{EmailMessage, EmailSender};

/// Writes outgoing mail to the log. Development only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), String> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            body = %message.text_body,
            "Email (log provider)"
        );
        Ok(())
    }
}
