//! Configuration for the account service

use sf_shared::AppConfig;

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Echo issued codes back to the client (never in production)
    pub expose_test_otp: bool,
    /// Minimum accepted password length
    pub min_password_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            expose_test_otp: false,
            min_password_length: 6,
        }
    }
}

impl From<&AppConfig> for AuthServiceConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            expose_test_otp: config.environment.exposes_test_otp(),
            min_password_length: config.auth.min_password_length,
        }
    }
}
