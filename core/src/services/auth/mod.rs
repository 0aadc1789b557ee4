//! Account service module
//!
//! This module provides the customer account workflows:
//! - Registration with email OTP verification
//! - Login and session token issuance
//! - OTP-gated password reset
//! - Authenticated password change and profile snapshots

mod config;
mod password;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::PasswordHasher;
pub use service::AuthService;
pub use types::{
    AccountSnapshot, LoginOutcome, OtpIssued, RegisterInput, RegistrationStarted,
    ResetPasswordInput, ResetSessionIssued,
};
