//! Shared utilities and common types for the storefront server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration loaded from the environment
//! - Error response structures and error codes
//! - Pagination metadata and response envelopes
//! - Validation helpers (email normalization, masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, EmailConfig, EmailProvider, Environment,
    JwtConfig, OtpConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus, PageMeta, PageRequest};
pub use utils::validation;
