//! MySQL implementations of repository traits.
//!
//! UUIDs are stored as `CHAR(36)` strings. Line-item variants are stored as
//! `''` when absent so the composite unique keys stay total.

mod cart_repository_impl;
mod order_repository_impl;
mod otp_repository_impl;
mod product_repository_impl;
mod user_repository_impl;
mod wishlist_repository_impl;

pub use cart_repository_impl::MySqlCartRepository;
pub use order_repository_impl::MySqlOrderRepository;
pub use otp_repository_impl::MySqlOtpRepository;
pub use product_repository_impl::MySqlProductRepository;
pub use user_repository_impl::MySqlUserRepository;
pub use wishlist_repository_impl::MySqlWishlistRepository;

use chrono::{DateTime, Utc};
use sf_core::domain::entities::line_item::LineItem;
use sf_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Row};
use uuid::Uuid;

/// Map a query failure to an internal domain error with context
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

/// Read one column, mapping decode failures to an internal error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", name, e),
    })
}

/// Shared row shape of `cart_items` and `wishlist_items`
pub(crate) const LINE_ITEM_COLUMNS: &str =
    "product_id, name, price, image, quantity, selected_size, selected_color, added_at";

pub(crate) fn row_to_line_item(row: &MySqlRow) -> Result<LineItem, DomainError> {
    Ok(LineItem {
        product_id: column(row, "product_id")?,
        name: column(row, "name")?,
        price: column(row, "price")?,
        image: column(row, "image")?,
        quantity: column(row, "quantity")?,
        selected_size: column(row, "selected_size")?,
        selected_color: column(row, "selected_color")?,
        added_at: column::<DateTime<Utc>>(row, "added_at")?,
    })
}
