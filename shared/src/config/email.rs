//! Outbound email configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Which transport delivers outbound mail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Write messages to the log instead of sending them
    #[default]
    Log,
    /// Relay through an SMTP server
    Smtp,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" | "mock" | "console" => Ok(EmailProvider::Log),
            "smtp" => Ok(EmailProvider::Smtp),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

/// SMTP / sender settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,

    /// SMTP relay host
    #[serde(default)]
    pub smtp_host: Option<String>,

    /// SMTP port (STARTTLS)
    pub smtp_port: u16,

    #[serde(default)]
    pub smtp_username: Option<String>,

    #[serde(default, skip_serializing)]
    pub smtp_password: Option<String>,

    /// Transport timeout in seconds
    pub timeout: u64,

    /// `From` mailbox, e.g. `Storefront <no-reply@example.com>`
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Log,
            smtp_host: None,
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            timeout: 10,
            from_address: String::from("Storefront <no-reply@localhost>"),
        }
    }
}

impl EmailConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("EMAIL_PROVIDER", defaults.provider),
            smtp_host: env_opt("SMTP_HOST"),
            smtp_port: env_or("SMTP_PORT", defaults.smtp_port),
            smtp_username: env_opt("SMTP_USERNAME"),
            smtp_password: env_opt("SMTP_PASSWORD"),
            timeout: env_or("SMTP_TIMEOUT", defaults.timeout),
            from_address: env_or("EMAIL_FROM", defaults.from_address),
        }
    }
}
