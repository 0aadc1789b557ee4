//! Cart service module
//!
//! Lines are merged on `(productId, selectedSize, selectedColor)`; every
//! mutation returns the full cart.

mod service;

#[cfg(test)]
mod tests;

pub use service::CartService;
pub(crate) use service::{validate_item, validate_line};
