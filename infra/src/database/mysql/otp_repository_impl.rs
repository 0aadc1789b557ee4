//! MySQL implementation of the OtpRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use sf_core::domain::entities::otp::{OtpPurpose, OtpRecord};
use sf_core::errors::DomainError;
use sf_core::repositories::OtpRepository;

use super::{column, db_error, uuid_column};

pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &MySqlRow) -> Result<OtpRecord, DomainError> {
        let purpose: String = column(row, "purpose")?;
        Ok(OtpRecord {
            id: uuid_column(row, "id")?,
            email: column(row, "email")?,
            code: column(row, "code")?,
            purpose: purpose
                .parse::<OtpPurpose>()
                .map_err(|message| DomainError::Internal { message })?,
            attempts: column(row, "attempts")?,
            created_at: column(row, "created_at")?,
            expires_at: column(row, "expires_at")?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn replace(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin OTP transaction"))?;

        sqlx::query("DELETE FROM otp_codes WHERE email = ?")
            .bind(&record.email)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to clear previous OTPs"))?;

        sqlx::query(
            r#"
            INSERT INTO otp_codes (id, email, code, purpose, attempts, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.email)
        .bind(&record.code)
        .bind(record.purpose.as_str())
        .bind(record.attempts)
        .bind(record.created_at)
        .bind(record.expires_at)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to store OTP"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit OTP transaction"))?;

        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<OtpRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, code, purpose, attempts, created_at, expires_at
            FROM otp_codes
            WHERE email = ?
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find OTP"))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn increment_attempts(&self, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE otp_codes SET attempts = attempts + 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to increment OTP attempts"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM otp_codes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete OTP"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otp_codes WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete OTPs by email"))?;
        Ok(result.rows_affected())
    }

    async fn delete_expired(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otp_codes WHERE expires_at <= ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to purge expired OTPs"))?;
        Ok(result.rows_affected())
    }
}
