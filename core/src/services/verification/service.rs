//! Main verification service implementation

use std::sync::Arc;

use sf_shared::validation::mask_email;

use crate::domain::entities::otp::{OtpPurpose, OtpRecord};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::OtpRepository;

use super::config::VerificationServiceConfig;

/// Issues and checks one-time codes sent by email
pub struct VerificationService {
    repository: Arc<dyn OtpRepository>,
    config: VerificationServiceConfig,
}

impl VerificationService {
    pub fn new(repository: Arc<dyn OtpRepository>, config: VerificationServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Code lifetime in minutes, as promised in emails
    pub fn code_expiration_minutes(&self) -> i64 {
        self.config.code_expiration_minutes
    }

    /// Issue a fresh code for `email`, invalidating every earlier one
    pub async fn issue(&self, email: &str, purpose: OtpPurpose) -> DomainResult<OtpRecord> {
        let record = OtpRecord::new(
            email.to_string(),
            purpose,
            self.config.code_expiration_minutes,
        );
        let record = self.repository.replace(record).await?;

        tracing::info!(
            event = "otp_generated",
            email = %mask_email(email),
            purpose = purpose.as_str(),
            expires_at = %record.expires_at,
            "One-time code issued"
        );
        Ok(record)
    }

    /// Check a submitted code without consuming it.
    ///
    /// Missing, expired, exhausted, wrong-purpose and mismatched codes all
    /// yield `InvalidOrExpiredOtp`. A mismatch counts as an attempt.
    pub async fn verify(
        &self,
        email: &str,
        submitted: &str,
        purpose: OtpPurpose,
    ) -> DomainResult<OtpRecord> {
        let Some(record) = self.repository.find_by_email(email).await? else {
            tracing::info!(event = "otp_missing", email = %mask_email(email), "No code on file");
            return Err(AuthError::InvalidOrExpiredOtp.into());
        };

        if record.purpose != purpose || !record.is_usable(self.config.max_attempts) {
            tracing::info!(
                event = "otp_unusable",
                email = %mask_email(email),
                expired = record.is_expired(),
                attempts = record.attempts,
                "Code cannot be used"
            );
            return Err(AuthError::InvalidOrExpiredOtp.into());
        }

        if !record.matches(submitted) {
            self.repository.increment_attempts(record.id).await?;
            tracing::warn!(
                event = "otp_mismatch",
                email = %mask_email(email),
                remaining = record.remaining_attempts(self.config.max_attempts) - 1,
                "Wrong code submitted"
            );
            return Err(AuthError::InvalidOrExpiredOtp.into());
        }

        Ok(record)
    }

    /// Delete a verified code. Failure is logged, not returned.
    pub async fn consume(&self, record: &OtpRecord) {
        if let Err(e) = self.repository.delete(record.id).await {
            tracing::warn!(
                event = "otp_delete_failed",
                email = %mask_email(&record.email),
                error = %e,
                "Could not delete consumed code"
            );
        }
    }

    /// Delete every code issued to `email`
    pub async fn clear(&self, email: &str) -> DomainResult<u64> {
        self.repository.delete_by_email(email).await
    }

    /// Remove expired codes; run periodically
    pub async fn purge_expired(&self) -> DomainResult<u64> {
        let removed = self.repository.delete_expired().await?;
        if removed > 0 {
            tracing::info!(event = "otp_purged", removed, "Expired codes removed");
        }
        Ok(removed)
    }
}
