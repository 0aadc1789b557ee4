//! User repository trait defining the interface for user data persistence.
//!
//! Writes are field-scoped: callers never save a whole user document back, so
//! concurrent requests touching different fields cannot overwrite each other.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by normalized email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Err(DomainError::Auth(AuthError::UserExists))` - Email already taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace the password hash of a user
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No such user
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError>;

    /// Stamp the last successful login
    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), DomainError>;
}
