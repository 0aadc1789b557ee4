//! Token claim sets for JWT-based sessions and the OTP workflows.
//!
//! Each kind of token is signed with the same key but carries its own
//! audience, so a token of one kind is never accepted as another.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audience of session (bearer) tokens
pub const SESSION_AUDIENCE: &str = "storefront-api";

/// Audience of password-reset session tokens
pub const RESET_AUDIENCE: &str = "storefront-password-reset";

/// Audience of pending-registration tokens
pub const PENDING_REGISTRATION_AUDIENCE: &str = "storefront-registration";

/// Claims structure for session JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    pub iss: String,

    pub aud: String,

    /// JWT ID
    pub jti: String,

    pub email: String,
}

impl SessionClaims {
    pub fn new(user_id: Uuid, email: &str, issuer: &str, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: SESSION_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            email: email.to_string(),
        }
    }

    /// Parses the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Claims of the short-lived token proving a reset OTP was verified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetSessionClaims {
    pub email: String,
    pub otp_verified: bool,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
    pub jti: String,
}

impl ResetSessionClaims {
    pub fn new(email: &str, issuer: &str, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            email: email.to_string(),
            otp_verified: true,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
            iss: issuer.to_string(),
            aud: RESET_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Registration data held by the client between register and verify-otp.
///
/// Carries the bcrypt hash of the chosen password, never the password itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub accept_terms: bool,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl PendingRegistration {
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: String,
        accept_terms: bool,
        issuer: &str,
        expiry_seconds: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.to_string(),
            password_hash,
            accept_terms,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
            iss: issuer.to_string(),
            aud: PENDING_REGISTRATION_AUDIENCE.to_string(),
        }
    }
}
