//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, CommerceError, TokenError, ValidationError};

use thiserror::Error;

/// Root error of every service and repository operation
#[derive(Error, Debug)]
pub enum DomainError {
    /// A path or lookup named something that does not exist
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// The bearer token names no account
    #[error("Unauthorized access")]
    Unauthorized,

    /// Storage or transport failure; the message is for logs only
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

impl DomainError {
    /// Shorthand for a storage or transport failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
