//! Unit tests for token service

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    })
}

fn user() -> User {
    User::new("Ada", "Lovelace", "ada@example.com", "hash".to_string(), true)
}

#[test]
fn test_session_round_trip() {
    let service = service();
    let user = user();

    let issued = service.issue_session(&user).unwrap();
    assert_eq!(issued.expires_in, 24 * 60 * 60);

    let claims = service.verify_session(&issued.token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

#[test]
fn test_expired_session_is_reported_as_expired() {
    let service = TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        session_expiry_seconds: -60,
        ..Default::default()
    });
    let issued = service.issue_session(&user()).unwrap();

    let result = service.verify_session(&issued.token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::TokenExpired))));
}

#[test]
fn test_tampered_or_foreign_session_is_invalid() {
    let issued = service().issue_session(&user()).unwrap();
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "another-secret".to_string(),
        ..Default::default()
    });

    assert!(matches!(
        other.verify_session(&issued.token),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
    assert!(matches!(
        service().verify_session("not-a-jwt"),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_reset_session_is_bound_to_email() {
    let service = service();
    let token = service.issue_reset_session("ada@example.com").unwrap();

    let claims = service.verify_reset_session(&token, "ada@example.com").unwrap();
    assert!(claims.otp_verified);
    assert_eq!(claims.exp - claims.iat, 15 * 60);

    assert!(matches!(
        service.verify_reset_session(&token, "eve@example.com"),
        Err(DomainError::Auth(AuthError::InvalidResetSession))
    ));
}

#[test]
fn test_token_kinds_are_not_interchangeable() {
    let service = service();
    let session = service.issue_session(&user()).unwrap().token;
    let reset = service.issue_reset_session("ada@example.com").unwrap();

    assert!(service.verify_session(&reset).is_err());
    assert!(service.verify_reset_session(&session, "ada@example.com").is_err());
    assert!(matches!(
        service.decode_pending_registration(&reset),
        Err(DomainError::Auth(AuthError::InvalidPendingData))
    ));
}

#[test]
fn test_pending_registration_carries_hash_only() {
    let service = service();
    let token = service
        .issue_pending_registration("Ada", "Lovelace", "ada@example.com", "$2b$04$hash".to_string(), true)
        .unwrap();

    let pending = service.decode_pending_registration(&token).unwrap();
    assert_eq!(pending.email, "ada@example.com");
    assert_eq!(pending.password_hash, "$2b$04$hash");
    assert!(pending.accept_terms);

    assert!(matches!(
        service.decode_pending_registration("garbage"),
        Err(DomainError::Auth(AuthError::InvalidPendingData))
    ));
}
