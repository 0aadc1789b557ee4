//! Notifier: composes transactional emails and hands them to the sender

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sf_shared::validation::mask_email;

use crate::domain::entities::order::Order;
use crate::domain::entities::otp::OtpPurpose;
use crate::domain::entities::user::User;

use super::templates;
use super::traits::{EmailMessage, EmailSender};

/// How messages are handed to the sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Spawn a task per message; the request never waits for SMTP
    #[default]
    Background,
    /// Await delivery in place. Used by tests that inspect sent mail.
    Inline,
}

#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Store name used in subjects and headings
    pub brand: String,
    /// Base URL for links back to the storefront
    pub frontend_url: String,
    pub delivery: DeliveryMode,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            brand: "Storefront".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            delivery: DeliveryMode::Background,
        }
    }
}

/// Best-effort email notifications
pub struct Notifier {
    sender: Arc<dyn EmailSender>,
    config: NotifierConfig,
}

impl Notifier {
    pub fn new(sender: Arc<dyn EmailSender>, config: NotifierConfig) -> Self {
        Self { sender, config }
    }

    pub async fn otp_code(&self, email: &str, code: &str, purpose: OtpPurpose, valid_minutes: i64) {
        let message = templates::otp_code(&self.config.brand, email, code, purpose, valid_minutes);
        self.dispatch("otp_code", message).await;
    }

    pub async fn login_notice(&self, user: &User, at: DateTime<Utc>) {
        let message = templates::login_notice(&self.config.brand, &user.email, &user.name, at);
        self.dispatch("login_notice", message).await;
    }

    pub async fn password_changed(&self, email: &str) {
        let message = templates::password_changed(&self.config.brand, email, &self.config.frontend_url);
        self.dispatch("password_changed", message).await;
    }

    pub async fn order_confirmation(&self, user: &User, order: &Order) {
        let message = templates::order_confirmation(
            &self.config.brand,
            &user.email,
            &user.name,
            order,
            &self.config.frontend_url,
        );
        self.dispatch("order_confirmation", message).await;
    }

    async fn dispatch(&self, kind: &'static str, message: EmailMessage) {
        let sender = Arc::clone(&self.sender);
        let delivery = async move {
            let to = mask_email(&message.to);
            match sender.send(message).await {
                Ok(()) => tracing::info!(event = "email_sent", kind, to = %to, "Notification sent"),
                Err(e) => tracing::warn!(
                    event = "email_failed",
                    kind,
                    to = %to,
                    error = %e,
                    "Notification could not be delivered"
                ),
            }
        };

        match self.config.delivery {
            DeliveryMode::Background => {
                tokio::spawn(delivery);
            }
            DeliveryMode::Inline => delivery.await,
        }
    }
}
