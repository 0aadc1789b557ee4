//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::token::{
    PendingRegistration, ResetSessionClaims, SessionClaims, PENDING_REGISTRATION_AUDIENCE,
    RESET_AUDIENCE, SESSION_AUDIENCE,
};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, TokenError};

use super::config::TokenServiceConfig;

/// A freshly signed session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Service for signing and verifying the JWTs used by the storefront
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_validation: Validation,
    reset_validation: Validation,
    pending_validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut session_validation = Self::validation_for(&config.issuer, SESSION_AUDIENCE);
        session_validation.validate_nbf = true;

        Self {
            session_validation,
            reset_validation: Self::validation_for(&config.issuer, RESET_AUDIENCE),
            pending_validation: Self::validation_for(&config.issuer, PENDING_REGISTRATION_AUDIENCE),
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation_for(issuer: &str, audience: &str) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation
    }

    /// Session lifetime in seconds
    pub fn session_expiry_seconds(&self) -> i64 {
        self.config.session_expiry_seconds
    }

    /// Issue a bearer token for a logged-in user
    pub fn issue_session(&self, user: &User) -> Result<IssuedToken, DomainError> {
        let claims = SessionClaims::new(
            user.id,
            &user.email,
            &self.config.issuer,
            self.config.session_expiry_seconds,
        );
        Ok(IssuedToken {
            token: self.encode_jwt(&claims)?,
            expires_in: self.config.session_expiry_seconds,
        })
    }

    /// Verify a bearer token, distinguishing expired from otherwise invalid tokens
    pub fn verify_session(&self, token: &str) -> Result<SessionClaims, DomainError> {
        let claims: SessionClaims = decode(token, &self.decoding_key, &self.session_validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                _ => DomainError::Token(TokenError::InvalidToken),
            })?;

        claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        Ok(claims)
    }

    /// Issue the reset session handed out after a reset OTP is verified
    pub fn issue_reset_session(&self, email: &str) -> Result<String, DomainError> {
        let claims = ResetSessionClaims::new(
            email,
            &self.config.issuer,
            self.config.reset_session_expiry_seconds,
        );
        self.encode_jwt(&claims)
    }

    /// Verify a reset session and that it was issued for `email`
    pub fn verify_reset_session(
        &self,
        token: &str,
        email: &str,
    ) -> Result<ResetSessionClaims, DomainError> {
        let claims: ResetSessionClaims = self
            .decode_with(token, &self.reset_validation)
            .ok_or(AuthError::InvalidResetSession)?;

        if !claims.otp_verified || claims.email != email {
            return Err(AuthError::InvalidResetSession.into());
        }
        Ok(claims)
    }

    /// Sign the registration data the client must present with its OTP
    pub fn issue_pending_registration(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: String,
        accept_terms: bool,
    ) -> Result<String, DomainError> {
        let claims = PendingRegistration::new(
            first_name,
            last_name,
            email,
            password_hash,
            accept_terms,
            &self.config.issuer,
            self.config.pending_registration_expiry_seconds,
        );
        self.encode_jwt(&claims)
    }

    /// Decode a pending-registration token; any failure is `InvalidPendingData`
    pub fn decode_pending_registration(
        &self,
        token: &str,
    ) -> Result<PendingRegistration, DomainError> {
        self.decode_with(token, &self.pending_validation)
            .ok_or_else(|| AuthError::InvalidPendingData.into())
    }

    fn decode_with<T: DeserializeOwned>(&self, token: &str, validation: &Validation) -> Option<T> {
        match decode::<T>(token.trim(), &self.decoding_key, validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected workflow token");
                None
            }
        }
    }

    fn encode_jwt<T: Serialize>(&self, claims: &T) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
