//! Unit tests for account service

use chrono::Utc;

use crate::domain::entities::otp::{OtpPurpose, OtpRecord};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{OtpRepository, UserRepository};
use crate::services::auth::{RegisterInput, ResetPasswordInput};
use crate::services::notification::RecordingEmailSender;

use super::mocks::Harness;

const EMAIL: &str = "ada@example.com";
const PASSWORD: &str = "s3cret!";

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        accept_terms: true,
    }
}

fn auth_err<T: std::fmt::Debug>(result: Result<T, DomainError>) -> AuthError {
    match result {
        Err(DomainError::Auth(e)) => e,
        other => panic!("expected auth error, got {other:?}"),
    }
}

/// Register and verify, returning the harness with one account
async fn registered() -> Harness {
    let h = Harness::new();
    let started = h.service.register(register_input(EMAIL)).await.unwrap();
    let otp = started.test_otp.unwrap();
    h.service
        .verify_registration(EMAIL, &otp, &started.temp_data)
        .await
        .unwrap();
    h
}

#[tokio::test]
async fn test_register_issues_code_and_email() {
    let h = Harness::new();

    let started = h.service.register(register_input("  Ada@Example.com ")).await.unwrap();

    let otp = started.test_otp.clone().unwrap();
    assert_eq!(h.otps.code_for(EMAIL).await, Some(otp.clone()));
    let sent = h.emails.sent_to(EMAIL);
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text_body.contains(&otp));
    assert_eq!(h.users.count().await, 0);
}

#[tokio::test]
async fn test_pending_token_never_contains_password() {
    let h = Harness::new();
    let started = h.service.register(register_input(EMAIL)).await.unwrap();

    let pending = h.tokens.decode_pending_registration(&started.temp_data).unwrap();
    assert_ne!(pending.password_hash, PASSWORD);
    assert!(bcrypt::verify(PASSWORD, &pending.password_hash).unwrap());
    assert!(!started.temp_data.contains(PASSWORD));
}

#[tokio::test]
async fn test_register_validation() {
    let h = Harness::new();

    let mut short = register_input(EMAIL);
    short.password = "12345".to_string();
    assert_eq!(
        auth_err(h.service.register(short).await),
        AuthError::PasswordTooShort { min: 6 }
    );

    let bad_email = register_input("not-an-email");
    assert!(matches!(
        h.service.register(bad_email).await,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));

    let mut no_name = register_input(EMAIL);
    no_name.first_name = "  ".to_string();
    assert!(matches!(
        h.service.register(no_name).await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_register_existing_user_rejected() {
    let h = registered().await;
    assert_eq!(
        auth_err(h.service.register(register_input(EMAIL)).await),
        AuthError::UserExists
    );
}

#[tokio::test]
async fn test_wrong_then_right_otp() {
    let h = Harness::new();
    let started = h.service.register(register_input(EMAIL)).await.unwrap();
    let otp = started.test_otp.unwrap();
    let wrong = if otp == "123456" { "654321" } else { "123456" };

    assert_eq!(
        auth_err(h.service.verify_registration(EMAIL, wrong, &started.temp_data).await),
        AuthError::InvalidOrExpiredOtp
    );
    assert_eq!(h.users.count().await, 0);

    let user = h
        .service
        .verify_registration(EMAIL, &otp, &started.temp_data)
        .await
        .unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert!(h.users.find_by_email(EMAIL).await.unwrap().is_some());
    assert_eq!(h.otps.count_for(EMAIL).await, 0);

    // Code is consumed
    assert_eq!(
        auth_err(h.service.verify_registration(EMAIL, &otp, &started.temp_data).await),
        AuthError::InvalidOrExpiredOtp
    );
}

#[tokio::test]
async fn test_malformed_temp_data() {
    let h = Harness::new();
    let started = h.service.register(register_input(EMAIL)).await.unwrap();
    let otp = started.test_otp.unwrap();

    assert_eq!(
        auth_err(h.service.verify_registration(EMAIL, &otp, "bm90LWEtand0").await),
        AuthError::InvalidPendingData
    );
    assert_eq!(h.users.count().await, 0);
}

#[tokio::test]
async fn test_temp_data_for_other_email_rejected() {
    let h = Harness::new();
    let ada = h.service.register(register_input(EMAIL)).await.unwrap();
    let eve = h.service.register(register_input("eve@example.com")).await.unwrap();

    assert_eq!(
        auth_err(
            h.service
                .verify_registration(EMAIL, &ada.test_otp.unwrap(), &eve.temp_data)
                .await
        ),
        AuthError::InvalidPendingData
    );
}

#[tokio::test]
async fn test_verify_when_user_already_exists_consumes_code() {
    let h = Harness::new();
    let first = h.service.register(register_input(EMAIL)).await.unwrap();
    let second = h.service.register(register_input(EMAIL)).await.unwrap();
    // First registration completes using the latest code
    h.service
        .verify_registration(EMAIL, second.test_otp.as_deref().unwrap(), &second.temp_data)
        .await
        .unwrap();

    // A stale pending registration with a fresh code hits the existing account
    let record = h
        .otps
        .replace(OtpRecord::new(EMAIL.to_string(), OtpPurpose::Registration, 10))
        .await
        .unwrap();
    assert_eq!(
        auth_err(
            h.service
                .verify_registration(EMAIL, &record.code, &first.temp_data)
                .await
        ),
        AuthError::UserExists
    );
    assert_eq!(h.otps.count_for(EMAIL).await, 0);
}

#[tokio::test]
async fn test_resend_requires_fields_and_replaces_code() {
    let h = Harness::new();
    let started = h.service.register(register_input(EMAIL)).await.unwrap();

    assert!(matches!(
        h.service.resend_registration_otp(EMAIL, "").await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));

    let resent = h
        .service
        .resend_registration_otp(EMAIL, &started.temp_data)
        .await
        .unwrap();
    assert_eq!(h.otps.count_for(EMAIL).await, 1);
    assert_eq!(h.otps.code_for(EMAIL).await, resent.test_otp);
    assert_eq!(h.emails.sent_to(EMAIL).len(), 2);
}

#[tokio::test]
async fn test_login_success_stamps_last_login() {
    let h = registered().await;
    let before = Utc::now();

    let outcome = h.service.login("ADA@example.com", PASSWORD).await.unwrap();

    assert_eq!(outcome.expires_in, 24 * 60 * 60);
    let claims = h.tokens.verify_session(&outcome.token).unwrap();
    assert_eq!(claims.email, EMAIL);
    assert!(outcome.account.user.last_login.unwrap() >= before);
    assert!(outcome.account.cart.is_empty());

    let stored = h.users.find_by_email(EMAIL).await.unwrap().unwrap();
    assert!(stored.last_login.is_some());
}

#[tokio::test]
async fn test_wrong_password_does_not_touch_last_login() {
    let h = registered().await;

    assert_eq!(
        auth_err(h.service.login(EMAIL, "wrong-password").await),
        AuthError::InvalidCredentials
    );
    let stored = h.users.find_by_email(EMAIL).await.unwrap().unwrap();
    assert!(stored.last_login.is_none());
}

#[tokio::test]
async fn test_login_unknown_user() {
    let h = Harness::new();
    assert_eq!(
        auth_err(h.service.login("ghost@example.com", PASSWORD).await),
        AuthError::NotRegistered
    );
}

#[tokio::test]
async fn test_login_survives_email_failure() {
    let h = Harness::with_sender(RecordingEmailSender::failing());
    let started = h.service.register(register_input(EMAIL)).await.unwrap();
    h.service
        .verify_registration(EMAIL, &started.test_otp.unwrap(), &started.temp_data)
        .await
        .unwrap();

    assert!(h.service.login(EMAIL, PASSWORD).await.is_ok());
}

#[tokio::test]
async fn test_forgot_password_unknown_email() {
    let h = Harness::new();
    assert_eq!(
        auth_err(h.service.forgot_password("ghost@example.com").await),
        AuthError::UserNotFound
    );
}

#[tokio::test]
async fn test_full_password_reset() {
    let h = registered().await;

    let issued = h.service.forgot_password(EMAIL).await.unwrap();
    let otp = issued.test_otp.unwrap();
    let session = h.service.verify_reset_otp(EMAIL, &otp).await.unwrap();
    assert_eq!(session.email, EMAIL);
    // Verifying does not consume the code
    assert_eq!(h.otps.count_for(EMAIL).await, 1);

    h.service
        .reset_password(ResetPasswordInput {
            email: EMAIL.to_string(),
            reset_session: session.reset_session,
            new_password: "brand-new".to_string(),
            confirm_password: "brand-new".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(h.otps.count_for(EMAIL).await, 0);
    assert!(h.service.login(EMAIL, "brand-new").await.is_ok());
    assert_eq!(
        auth_err(h.service.login(EMAIL, PASSWORD).await),
        AuthError::InvalidCredentials
    );
}

#[tokio::test]
async fn test_reset_password_rules() {
    let h = registered().await;
    let session = h.tokens.issue_reset_session(EMAIL).unwrap();
    let input = |new: &str, confirm: &str, email: &str, session: &str| ResetPasswordInput {
        email: email.to_string(),
        reset_session: session.to_string(),
        new_password: new.to_string(),
        confirm_password: confirm.to_string(),
    };

    assert_eq!(
        auth_err(h.service.reset_password(input("abcdef", "abcdeg", EMAIL, &session)).await),
        AuthError::PasswordMismatch
    );
    assert_eq!(
        auth_err(h.service.reset_password(input("abc", "abc", EMAIL, &session)).await),
        AuthError::PasswordTooShort { min: 6 }
    );
    assert_eq!(
        auth_err(
            h.service
                .reset_password(input("abcdef", "abcdef", "eve@example.com", &session))
                .await
        ),
        AuthError::InvalidResetSession
    );
    assert_eq!(
        auth_err(h.service.reset_password(input("abcdef", "abcdef", EMAIL, "junk")).await),
        AuthError::InvalidResetSession
    );
}

#[tokio::test]
async fn test_change_password() {
    let h = registered().await;
    let user = h.users.find_by_email(EMAIL).await.unwrap().unwrap();

    assert_eq!(
        auth_err(h.service.change_password(user.id, "nope-nope", "another1").await),
        AuthError::InvalidCurrentPassword
    );
    assert_eq!(
        auth_err(h.service.change_password(user.id, PASSWORD, "abc").await),
        AuthError::PasswordTooShort { min: 6 }
    );

    h.service.change_password(user.id, PASSWORD, "another1").await.unwrap();
    assert!(h.service.login(EMAIL, "another1").await.is_ok());
}

#[tokio::test]
async fn test_require_admin() {
    let h = registered().await;
    let user = h.users.find_by_email(EMAIL).await.unwrap().unwrap();

    assert_eq!(
        auth_err(h.service.require_admin(user.id).await),
        AuthError::AdminRequired
    );
    h.users.set_admin(user.id, true).await;
    assert!(h.service.require_admin(user.id).await.is_ok());
}

#[tokio::test]
async fn test_profile_includes_collections() {
    use crate::domain::entities::line_item::{LineItemKey, NewLineItem};
    use crate::repositories::{CartRepository, OrderRepository};

    let h = registered().await;
    let user = h.users.find_by_email(EMAIL).await.unwrap().unwrap();
    h.carts
        .upsert_add(
            user.id,
            NewLineItem {
                key: LineItemKey::new("p1", Some("M"), None),
                name: "Tee".to_string(),
                price: rust_decimal::Decimal::new(1500, 2),
                image: String::new(),
                quantity: 1,
            },
            Utc::now(),
        )
        .await
        .unwrap();

    let snapshot = h.service.profile(user.id).await.unwrap();
    assert_eq!(snapshot.user.email, EMAIL);
    assert_eq!(snapshot.cart.len(), 1);
    assert!(snapshot.wishlist.is_empty());
    assert!(h.orders.list_for_user(user.id).await.unwrap().is_empty());
    assert!(snapshot.order_history.is_empty());
}
