//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "unauthorized";
    pub const FORBIDDEN: &str = "forbidden";
    pub const NOT_FOUND: &str = "not_found";
    pub const BAD_REQUEST: &str = "bad_request";
    pub const INTERNAL_ERROR: &str = "internal_error";
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const TOKEN_EXPIRED: &str = "token_expired";
    pub const TOKEN_INVALID: &str = "invalid_token";
    pub const USER_EXISTS: &str = "user_exists";
    pub const USER_NOT_FOUND: &str = "user_not_found";
    pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
    pub const INVALID_OTP: &str = "invalid_otp";
    pub const INVALID_PENDING_DATA: &str = "invalid_pending_data";
    pub const INVALID_RESET_SESSION: &str = "invalid_reset_session";
    pub const PASSWORD_MISMATCH: &str = "password_mismatch";
    pub const PASSWORD_TOO_SHORT: &str = "password_too_short";
    pub const INVALID_CURRENT_PASSWORD: &str = "invalid_current_password";
    pub const ITEM_NOT_FOUND: &str = "item_not_found";
    pub const PRODUCT_NOT_FOUND: &str = "product_not_found";
    pub const ORDER_NOT_FOUND: &str = "order_not_found";
    pub const INVALID_ORDER_DATA: &str = "invalid_order_data";
}
