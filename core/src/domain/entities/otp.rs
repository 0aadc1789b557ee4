//! One-time password records for email verification and password reset.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of wrong guesses before a code is burned
pub const MAX_ATTEMPTS: i32 = 5;

/// Length of the numeric code
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a code (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// What a code was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    Registration,
    PasswordReset,
}

impl OtpPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::Registration => "registration",
            OtpPurpose::PasswordReset => "password_reset",
        }
    }
}

impl std::str::FromStr for OtpPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registration" => Ok(OtpPurpose::Registration),
            "password_reset" => Ok(OtpPurpose::PasswordReset),
            _ => Err(format!("Invalid OTP purpose: {}", s)),
        }
    }
}

/// A single issued code. At most one live record exists per email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    pub id: Uuid,

    /// Normalized email the code was sent to
    pub email: String,

    /// Six decimal digits, 100000..=999999
    pub code: String,

    pub purpose: OtpPurpose,

    /// Wrong guesses so far
    pub attempts: i32,

    pub created_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Issue a fresh code with the given lifetime
    pub fn new(email: String, purpose: OtpPurpose, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            code: Self::generate_code(),
            purpose,
            attempts: 0,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Uniform over 100000..=999999, so the code never has a leading zero
    pub fn generate_code() -> String {
        let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        code.to_string()
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Whether another guess may be checked against this record
    pub fn is_usable(&self, max_attempts: i32) -> bool {
        !self.is_expired() && self.attempts < max_attempts
    }

    /// Constant-time comparison against a submitted code
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq::constant_time_eq(self.code.as_bytes(), submitted.trim().as_bytes())
    }

    pub fn remaining_attempts(&self, max_attempts: i32) -> i32 {
        (max_attempts - self.attempts).max(0)
    }
}
