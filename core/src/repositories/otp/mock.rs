//! Mock implementation of OtpRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::otp::OtpRecord;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

#[derive(Default)]
pub struct MockOtpRepository {
    records: Arc<Mutex<Vec<OtpRecord>>>,
}

impl MockOtpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record without clearing older ones
    pub async fn insert_raw(&self, record: OtpRecord) {
        self.records.lock().await.push(record);
    }

    pub async fn count_for(&self, email: &str) -> usize {
        self.records
            .lock()
            .await
            .iter()
            .filter(|r| r.email == email)
            .count()
    }

    /// Latest code issued to an email, for tests that need to "read the inbox"
    pub async fn code_for(&self, email: &str) -> Option<String> {
        self.records
            .lock()
            .await
            .iter()
            .rev()
            .find(|r| r.email == email)
            .map(|r| r.code.clone())
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn replace(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let mut records = self.records.lock().await;
        records.retain(|r| r.email != record.email);
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<OtpRecord>, DomainError> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .filter(|r| r.email == email)
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn increment_attempts(&self, id: Uuid) -> Result<(), DomainError> {
        let mut records = self.records.lock().await;
        if let Some(record) = records.iter_mut().find(|r| r.id == id) {
            record.attempts += 1;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|r| r.email != email);
        Ok((before - records.len()) as u64)
    }

    async fn delete_expired(&self) -> Result<u64, DomainError> {
        let now = Utc::now();
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|r| r.expires_at >= now);
        Ok((before - records.len()) as u64)
    }
}
