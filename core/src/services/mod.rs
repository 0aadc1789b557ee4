//! Business services containing domain logic and use cases.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod notification;
pub mod order;
pub mod token;
pub mod verification;
pub mod wishlist;

pub use auth::{AuthService, AuthServiceConfig, PasswordHasher};
pub use cart::CartService;
pub use catalog::{CatalogService, ProductPage};
pub use notification::{DeliveryMode, EmailMessage, EmailSender, Notifier, NotifierConfig};
pub use order::OrderService;
pub use token::{IssuedToken, TokenService, TokenServiceConfig};
pub use verification::{VerificationService, VerificationServiceConfig};
pub use wishlist::WishlistService;
