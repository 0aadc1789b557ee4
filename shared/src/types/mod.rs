//! Type definitions module
//!
//! - `pagination` - Page requests and pagination metadata for list endpoints
//! - `response` - Health check payloads

pub mod pagination;
pub mod response;

pub use pagination::{PageMeta, PageRequest};
pub use response::{HealthResponse, HealthStatus};
