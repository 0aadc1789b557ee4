//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Session (bearer) token issuance and verification
//! - Password-reset session tokens
//! - Signed pending-registration tokens held by the client

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::{IssuedToken, TokenService};
