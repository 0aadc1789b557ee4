//! Domain-specific error types for accounts, tokens, validation and commerce
//!
//! Messages here are the user-facing text; the HTTP layer picks the status
//! code and machine-readable error code for each variant.

use thiserror::Error;

/// Account and OTP workflow errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists with this email")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("User not found. Please register first")]
    NotRegistered,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired OTP")]
    InvalidOrExpiredOtp,

    #[error("Invalid registration data")]
    InvalidPendingData,

    #[error("Invalid or expired reset session")]
    InvalidResetSession,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Current password is incorrect")]
    InvalidCurrentPassword,

    #[error("Admin access required")]
    AdminRequired,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange { field: String, min: String, max: String },
}

/// Cart, wishlist, order and catalog errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommerceError {
    #[error("Item not found")]
    ItemNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Invalid order data: {reason}")]
    InvalidOrderData { reason: String },
}
