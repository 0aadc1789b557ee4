//! Email delivery implementations of [`sf_core::services::EmailSender`]

mod log_sender;
mod smtp;

use std::sync::Arc;

use sf_core::services::EmailSender;
use sf_shared::{EmailConfig, EmailProvider};

use crate::InfrastructureError;

pub use log_sender::LogEmailSender;
pub use smtp::SmtpEmailSender;

/// Build the sender selected by `EMAIL_PROVIDER`
pub fn build_email_sender(config: &EmailConfig) -> Result<Arc<dyn EmailSender>, InfrastructureError> {
    match config.provider {
        EmailProvider::Smtp => {
            let sender = SmtpEmailSender::new(config)?;
            tracing::info!(provider = "smtp", "Email delivery configured");
            Ok(Arc::new(sender))
        }
        EmailProvider::Log => {
            tracing::warn!(provider = "log", "Emails will be logged, not delivered");
            Ok(Arc::new(LogEmailSender))
        }
    }
}
