//! Request and response bodies of the HTTP API.
//!
//! All JSON uses camelCase field names.

pub mod auth;
pub mod product;
pub mod user;

use serde::Serialize;

/// Body carrying only a human readable message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
