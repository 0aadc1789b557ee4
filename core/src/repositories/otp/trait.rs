//! OTP repository trait for one-time code persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::otp::OtpRecord;
use crate::errors::DomainError;

#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Delete every record for `record.email` and insert `record`, atomically.
    ///
    /// After this call exactly one live record exists for the email.
    async fn replace(&self, record: OtpRecord) -> Result<OtpRecord, DomainError>;

    /// The current record for an email, if any (expired records included)
    async fn find_by_email(&self, email: &str) -> Result<Option<OtpRecord>, DomainError>;

    /// Count one more wrong guess against a record
    async fn increment_attempts(&self, id: Uuid) -> Result<(), DomainError>;

    /// Delete a single record. Deleting a missing record is not an error.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete all records for an email, returning how many were removed
    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError>;

    /// Delete records whose `expires_at` has passed
    async fn delete_expired(&self) -> Result<u64, DomainError>;
}
