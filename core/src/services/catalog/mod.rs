//! Product catalog module
//!
//! Public browsing (search, featured, related) and the admin write path.
//! Admin gating happens at the account layer before these calls.

mod service;

#[cfg(test)]
mod tests;

pub use service::{CatalogService, ProductPage, DEFAULT_FEATURED_LIMIT, DEFAULT_RELATED_LIMIT};
