//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use super::env_or;

const DEFAULT_SECRET: &str = "storefront-dev-secret-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Session token expiry time in seconds
    pub session_expiry: i64,

    /// Password-reset session expiry time in seconds
    pub reset_session_expiry: i64,

    /// Pending-registration token expiry time in seconds
    pub pending_registration_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            session_expiry: 86_400,             // 24 hours
            reset_session_expiry: 900,          // 15 minutes
            pending_registration_expiry: 1_800, // 30 minutes
            issuer: String::from("storefront"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Load from `JWT_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env_or("JWT_SECRET", defaults.secret),
            session_expiry: env_or("JWT_SESSION_EXPIRY", defaults.session_expiry),
            reset_session_expiry: env_or("JWT_RESET_SESSION_EXPIRY", defaults.reset_session_expiry),
            pending_registration_expiry: env_or(
                "JWT_PENDING_REGISTRATION_EXPIRY",
                defaults.pending_registration_expiry,
            ),
            issuer: env_or("JWT_ISSUER", defaults.issuer),
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// One-time password policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Code lifetime in minutes
    pub expiration_minutes: i64,

    /// Wrong guesses allowed before a code becomes unusable
    pub max_attempts: i32,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiration_minutes: 10,
            max_attempts: 5,
        }
    }
}

impl OtpConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            expiration_minutes: env_or("OTP_EXPIRATION_MINUTES", defaults.expiration_minutes),
            max_attempts: env_or("OTP_MAX_ATTEMPTS", defaults.max_attempts),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// OTP configuration
    pub otp: OtpConfig,

    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Minimum accepted password length
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            otp: OtpConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
            min_password_length: default_min_password_length(),
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            otp: OtpConfig::from_env(),
            bcrypt_cost: env_or("BCRYPT_COST", default_bcrypt_cost()),
            min_password_length: default_min_password_length(),
        }
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_min_password_length() -> usize {
    6
}
