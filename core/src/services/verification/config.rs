//! Configuration for the verification service

use sf_shared::OtpConfig;

use crate::domain::entities::otp::{DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes before a code expires
    pub code_expiration_minutes: i64,
    /// Maximum number of wrong guesses allowed per code
    pub max_attempts: i32,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl From<&OtpConfig> for VerificationServiceConfig {
    fn from(otp: &OtpConfig) -> Self {
        Self {
            code_expiration_minutes: otp.expiration_minutes,
            max_attempts: otp.max_attempts,
        }
    }
}
