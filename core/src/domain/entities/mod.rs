//! Domain entities representing core business objects.

pub mod line_item;
pub mod order;
pub mod otp;
pub mod product;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use line_item::{
    max_amount, LineItem, LineItemKey, NewLineItem, MAX_IMAGE_LENGTH, MAX_KEY_PART_LENGTH,
    MAX_NAME_LENGTH, MAX_QUANTITY,
};
pub use order::{NewOrder, Order, OrderStatus, ShippingAddress};
pub use otp::{OtpPurpose, OtpRecord, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};
pub use product::{NewProduct, Product, ProductPatch, ProductQuery, ProductSort, SortOrder};
pub use token::{PendingRegistration, ResetSessionClaims, SessionClaims};
pub use user::{User, UserProfile};
