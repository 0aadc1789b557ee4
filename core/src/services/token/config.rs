//! Configuration for the token service

use sf_shared::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret (HS256)
    pub jwt_secret: String,
    /// `iss` claim written and required on every token
    pub issuer: String,
    /// Session token lifetime in seconds
    pub session_expiry_seconds: i64,
    /// Reset session lifetime in seconds
    pub reset_session_expiry_seconds: i64,
    /// Pending-registration token lifetime in seconds
    pub pending_registration_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            issuer: jwt.issuer.clone(),
            session_expiry_seconds: jwt.session_expiry,
            reset_session_expiry_seconds: jwt.reset_session_expiry,
            pending_registration_expiry_seconds: jwt.pending_registration_expiry,
        }
    }
}
