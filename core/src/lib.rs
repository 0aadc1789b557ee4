//! # Storefront Core
//!
//! Domain layer for the storefront backend: entities, the error taxonomy,
//! repository interfaces (with in-memory implementations behind the `mock`
//! feature) and the services implementing the account, cart, wishlist,
//! order and catalog workflows.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use errors::{DomainError, DomainResult};
