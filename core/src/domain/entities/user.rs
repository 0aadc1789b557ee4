//! User entity and its public projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered storefront customer
///
/// `name` is derived from the first and last name and is recomputed on every
/// change to either; it is never written independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,

    /// Trimmed, lower-cased email address (unique)
    pub email: String,

    pub first_name: String,

    pub last_name: String,

    /// "first last", derived
    pub name: String,

    /// bcrypt hash, never serialized
    pub password_hash: String,

    pub accept_terms: bool,

    /// Grants access to catalog administration
    pub is_admin: bool,

    pub last_login: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user from verified registration data
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: String,
        accept_terms: bool,
    ) -> Self {
        let now = Utc::now();
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();
        Self {
            id: Uuid::new_v4(),
            email: sf_shared::validation::normalize_email(email),
            name: Self::compose_name(&first_name, &last_name),
            first_name,
            last_name,
            password_hash,
            accept_terms,
            is_admin: false,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the display name from its parts
    pub fn compose_name(first_name: &str, last_name: &str) -> String {
        format!("{} {}", first_name.trim(), last_name.trim())
            .trim()
            .to_string()
    }

    /// Rename the user, keeping `name` in sync
    pub fn set_names(&mut self, first_name: &str, last_name: &str) {
        self.first_name = first_name.trim().to_string();
        self.last_name = last_name.trim().to_string();
        self.name = Self::compose_name(&self.first_name, &self.last_name);
        self.updated_at = Utc::now();
    }

    /// Sanitized view safe to return to clients
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            accept_terms: self.accept_terms,
            is_admin: self.is_admin,
            last_login: self.last_login,
            created_at: self.created_at,
        }
    }
}

/// Public user representation (no credentials)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub email: String,
    pub accept_terms: bool,
    pub is_admin: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
