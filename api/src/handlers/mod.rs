//! HTTP error mapping

pub mod error;

pub use error::{json_config, path_error, query_config, ApiError};
