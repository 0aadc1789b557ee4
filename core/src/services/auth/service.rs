//! Main account service implementation

use std::sync::Arc;

use chrono::Utc;
use sf_shared::validation::{is_valid_email, mask_email, normalize_email, not_blank};
use uuid::Uuid;

use crate::domain::entities::otp::OtpPurpose;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{CartRepository, OrderRepository, UserRepository, WishlistRepository};
use crate::services::notification::Notifier;
use crate::services::token::TokenService;
use crate::services::verification::VerificationService;

use super::config::AuthServiceConfig;
use super::password::PasswordHasher;
use super::types::{
    AccountSnapshot, LoginOutcome, OtpIssued, RegisterInput, RegistrationStarted,
    ResetPasswordInput, ResetSessionIssued,
};

/// Account service driving registration, login and password workflows
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    carts: Arc<dyn CartRepository>,
    wishlists: Arc<dyn WishlistRepository>,
    orders: Arc<dyn OrderRepository>,
    verification: Arc<VerificationService>,
    tokens: Arc<TokenService>,
    notifier: Arc<Notifier>,
    hasher: PasswordHasher,
    config: AuthServiceConfig,
}

impl AuthService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserRepository>,
        carts: Arc<dyn CartRepository>,
        wishlists: Arc<dyn WishlistRepository>,
        orders: Arc<dyn OrderRepository>,
        verification: Arc<VerificationService>,
        tokens: Arc<TokenService>,
        notifier: Arc<Notifier>,
        hasher: PasswordHasher,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users,
            carts,
            wishlists,
            orders,
            verification,
            tokens,
            notifier,
            hasher,
            config,
        }
    }

    /// Start a registration: validate, hash the password, issue and email a code.
    ///
    /// Returns the signed pending-registration token the client must send back.
    pub async fn register(&self, input: RegisterInput) -> DomainResult<RegistrationStarted> {
        let email = self.checked_email(&input.email)?;
        require_field(&input.first_name, "firstName")?;
        require_field(&input.last_name, "lastName")?;
        self.check_password_length(&input.password)?;

        if self.users.exists_by_email(&email).await? {
            return Err(AuthError::UserExists.into());
        }

        let password_hash = self.hasher.hash(&input.password).await?;
        let record = self.verification.issue(&email, OtpPurpose::Registration).await?;
        self.notifier
            .otp_code(
                &email,
                &record.code,
                OtpPurpose::Registration,
                self.verification.code_expiration_minutes(),
            )
            .await;

        let temp_data = self.tokens.issue_pending_registration(
            &input.first_name,
            &input.last_name,
            &email,
            password_hash,
            input.accept_terms,
        )?;

        tracing::info!(event = "registration_started", email = %mask_email(&email), "Registration pending verification");
        Ok(RegistrationStarted {
            temp_data,
            test_otp: self.test_otp(record.code),
        })
    }

    /// Verify the registration code and create the account
    pub async fn verify_registration(
        &self,
        email: &str,
        otp: &str,
        temp_data: &str,
    ) -> DomainResult<User> {
        let email = normalize_email(email);
        let record = self
            .verification
            .verify(&email, otp, OtpPurpose::Registration)
            .await?;

        let pending = self.tokens.decode_pending_registration(temp_data)?;
        if normalize_email(&pending.email) != email {
            return Err(AuthError::InvalidPendingData.into());
        }

        if self.users.exists_by_email(&email).await? {
            self.verification.consume(&record).await;
            return Err(AuthError::UserExists.into());
        }

        let user = User::new(
            &pending.first_name,
            &pending.last_name,
            &email,
            pending.password_hash,
            pending.accept_terms,
        );
        let created = match self.users.create(user).await {
            Ok(user) => user,
            Err(e) => {
                if matches!(e, DomainError::Auth(AuthError::UserExists)) {
                    self.verification.consume(&record).await;
                }
                return Err(e);
            }
        };
        self.verification.consume(&record).await;

        tracing::info!(event = "user_registered", user_id = %created.id, "Account created");
        Ok(created)
    }

    /// Issue a fresh registration code. `temp_data` must be present but is not decoded.
    pub async fn resend_registration_otp(
        &self,
        email: &str,
        temp_data: &str,
    ) -> DomainResult<OtpIssued> {
        require_field(email, "email")?;
        require_field(temp_data, "tempData")?;
        let email = normalize_email(email);

        let record = self.verification.issue(&email, OtpPurpose::Registration).await?;
        self.notifier
            .otp_code(
                &email,
                &record.code,
                OtpPurpose::Registration,
                self.verification.code_expiration_minutes(),
            )
            .await;

        Ok(OtpIssued {
            test_otp: self.test_otp(record.code),
        })
    }

    /// Check credentials, stamp `last_login` and issue a session token
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        let email = normalize_email(email);
        require_field(&email, "email")?;
        require_field(password, "password")?;

        let mut user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::NotRegistered)?;

        if !self.hasher.verify(password, &user.password_hash).await? {
            tracing::info!(event = "login_failed", email = %mask_email(&email), "Wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let now = Utc::now();
        self.users.record_login(user.id, now).await?;
        user.last_login = Some(now);

        let issued = self.tokens.issue_session(&user)?;
        self.notifier.login_notice(&user, now).await;

        tracing::info!(event = "login_succeeded", user_id = %user.id, "User logged in");
        Ok(LoginOutcome {
            token: issued.token,
            expires_in: issued.expires_in,
            account: self.snapshot(&user).await?,
        })
    }

    /// Email a password-reset code to a registered address
    pub async fn forgot_password(&self, email: &str) -> DomainResult<OtpIssued> {
        let email = self.checked_email(email)?;
        if !self.users.exists_by_email(&email).await? {
            return Err(AuthError::UserNotFound.into());
        }

        let record = self
            .verification
            .issue(&email, OtpPurpose::PasswordReset)
            .await?;
        self.notifier
            .otp_code(
                &email,
                &record.code,
                OtpPurpose::PasswordReset,
                self.verification.code_expiration_minutes(),
            )
            .await;

        Ok(OtpIssued {
            test_otp: self.test_otp(record.code),
        })
    }

    /// Verify a reset code and hand out a short-lived reset session.
    /// The code stays on file until the password is actually reset.
    pub async fn verify_reset_otp(&self, email: &str, otp: &str) -> DomainResult<ResetSessionIssued> {
        let email = normalize_email(email);
        require_field(otp, "otp")?;
        self.verification
            .verify(&email, otp, OtpPurpose::PasswordReset)
            .await?;

        Ok(ResetSessionIssued {
            reset_session: self.tokens.issue_reset_session(&email)?,
            email,
        })
    }

    /// Replace the password of the account named by a valid reset session
    pub async fn reset_password(&self, input: ResetPasswordInput) -> DomainResult<()> {
        if input.new_password != input.confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }
        self.check_password_length(&input.new_password)?;

        let email = normalize_email(&input.email);
        self.tokens.verify_reset_session(&input.reset_session, &email)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        let password_hash = self.hasher.hash(&input.new_password).await?;
        self.users.update_password(user.id, &password_hash).await?;

        if let Err(e) = self.verification.clear(&email).await {
            tracing::warn!(event = "otp_clear_failed", error = %e, "Could not clear reset codes");
        }
        self.notifier.password_changed(&email).await;

        tracing::info!(event = "password_reset", user_id = %user.id, "Password reset");
        Ok(())
    }

    /// Change the password of a logged-in user
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        require_field(current_password, "currentPassword")?;
        self.check_password_length(new_password)?;

        let user = self.require_user(user_id).await?;
        if !self.hasher.verify(current_password, &user.password_hash).await? {
            return Err(AuthError::InvalidCurrentPassword.into());
        }

        let password_hash = self.hasher.hash(new_password).await?;
        self.users.update_password(user.id, &password_hash).await?;
        self.notifier.password_changed(&user.email).await;

        tracing::info!(event = "password_changed", user_id = %user.id, "Password changed");
        Ok(())
    }

    /// Profile plus cart, wishlist and order history
    pub async fn profile(&self, user_id: Uuid) -> DomainResult<AccountSnapshot> {
        let user = self.require_user(user_id).await?;
        self.snapshot(&user).await
    }

    /// Load a user that must exist
    pub async fn require_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    /// Load a user that must exist and hold the admin flag
    pub async fn require_admin(&self, user_id: Uuid) -> DomainResult<User> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;
        if !user.is_admin {
            tracing::warn!(event = "admin_denied", user_id = %user_id, "Non-admin attempted an admin action");
            return Err(AuthError::AdminRequired.into());
        }
        Ok(user)
    }

    async fn snapshot(&self, user: &User) -> DomainResult<AccountSnapshot> {
        let (cart, wishlist, order_history) = tokio::try_join!(
            self.carts.list(user.id),
            self.wishlists.list(user.id),
            self.orders.list_for_user(user.id),
        )?;
        Ok(AccountSnapshot {
            user: user.profile(),
            cart,
            wishlist,
            order_history,
        })
    }

    fn checked_email(&self, email: &str) -> DomainResult<String> {
        require_field(email, "email")?;
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        Ok(normalize_email(email))
    }

    fn check_password_length(&self, password: &str) -> DomainResult<()> {
        if password.chars().count() < self.config.min_password_length {
            return Err(AuthError::PasswordTooShort {
                min: self.config.min_password_length,
            }
            .into());
        }
        Ok(())
    }

    fn test_otp(&self, code: String) -> Option<String> {
        self.config.expose_test_otp.then_some(code)
    }
}

fn require_field(value: &str, field: &str) -> DomainResult<()> {
    if not_blank(value) {
        Ok(())
    } else {
        Err(ValidationError::RequiredField {
            field: field.to_string(),
        }
        .into())
    }
}
