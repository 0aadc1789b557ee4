//! Verification service module for email one-time codes
//!
//! This module provides the OTP half of the account workflows:
//! - Code issuance (replacing any earlier code for the email)
//! - Server-side expiry and attempt limits
//! - Constant-time code comparison
//! - Purging of expired codes

mod config;
mod service;


pub use config::VerificationServiceConfig;
pub use service::VerificationService;
