//! # Storefront Infrastructure
//!
//! Concrete implementations of the repository and delivery traits declared in
//! `sf_core`:
//! - **Database**: MySQL repositories using SQLx, plus the embedded migrations
//! - **Email**: SMTP delivery through lettre, or a logging sender for development

pub mod database;
pub mod email;

pub use database::DatabasePool;
pub use email::{build_email_sender, LogEmailSender, SmtpEmailSender};

use sf_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Embedded migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Message could not be built
    #[error("Email error: {0}")]
    Email(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
