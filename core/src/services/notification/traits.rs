//! Trait for outbound email integration

use async_trait::async_trait;

/// A rendered email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Trait for email transport integration
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one message. The error string is only logged.
    async fn send(&self, message: EmailMessage) -> Result<(), String>;
}
