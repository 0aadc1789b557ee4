//! SMTP delivery through lettre's async transport.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use sf_core::services::{EmailMessage, EmailSender};
use sf_shared::EmailConfig;

use crate::InfrastructureError;

#[derive(Clone)]
pub struct SmtpEmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpEmailSender {
    /// Build a STARTTLS transport. No connection is made until the first send.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let host = config
            .smtp_host
            .as_deref()
            .ok_or_else(|| InfrastructureError::Config("SMTP_HOST is required".to_string()))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(config.smtp_port)
            .timeout(Some(Duration::from_secs(config.timeout)));

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        // Fail at startup rather than on the first email
        config
            .from_address
            .parse::<lettre::message::Mailbox>()
            .map_err(|e| InfrastructureError::Config(format!("Invalid EMAIL_FROM: {}", e)))?;

        Ok(Self {
            mailer: builder.build(),
            from_address: config.from_address.clone(),
        })
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message, InfrastructureError> {
        let from = self
            .from_address
            .parse()
            .map_err(|_| InfrastructureError::Email(format!("Invalid sender: {}", self.from_address)))?;
        let to = message
            .to
            .parse()
            .map_err(|_| InfrastructureError::Email(format!("Invalid recipient: {}", message.to)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(message.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(message.html_body.clone()),
                    ),
            )
            .map_err(|e| InfrastructureError::Email(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), String> {
        let email = self.build_message(&message).map_err(|e| e.to_string())?;
        self.mailer.send(email).await.map_err(|e| e.to_string())?;
        Ok(())
    }
}
