//! Repository interfaces for persistence.
//!
//! Each trait lives in `<name>/trait.rs`. In-memory implementations sit next
//! to them in `mock.rs` and are compiled for tests or with the `mock` feature.

pub mod cart;
pub mod order;
pub mod otp;
pub mod product;
pub mod user;
pub mod wishlist;

pub use cart::CartRepository;
pub use order::OrderRepository;
pub use otp::OtpRepository;
pub use product::ProductRepository;
pub use user::UserRepository;
pub use wishlist::WishlistRepository;

#[cfg(any(test, feature = "mock"))]
pub use cart::MockCartRepository;
#[cfg(any(test, feature = "mock"))]
pub use order::MockOrderRepository;
#[cfg(any(test, feature = "mock"))]
pub use otp::MockOtpRepository;
#[cfg(any(test, feature = "mock"))]
pub use product::MockProductRepository;
#[cfg(any(test, feature = "mock"))]
pub use user::MockUserRepository;
#[cfg(any(test, feature = "mock"))]
pub use wishlist::MockWishlistRepository;
