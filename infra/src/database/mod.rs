//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and embedded migrations
//! - Repository implementations for every `sf_core` repository trait

pub mod connection;
pub mod mysql;

pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlCartRepository, MySqlOrderRepository, MySqlOtpRepository, MySqlProductRepository,
    MySqlUserRepository, MySqlWishlistRepository,
};
