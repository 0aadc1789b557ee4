//! Line items shared by carts, wishlists and orders.
//!
//! A line item is identified by `(product_id, selected_size, selected_color)`.
//! Missing size or color is stored as the empty string so the key is total.
//! Key parts are trimmed and then compared exactly, so `Red` and `red` are
//! different colors.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest quantity one line may hold. Merging into a line caps here.
pub const MAX_QUANTITY: i32 = 999;

/// Longest product id, size or color
pub const MAX_KEY_PART_LENGTH: usize = 64;

pub const MAX_NAME_LENGTH: usize = 255;

pub const MAX_IMAGE_LENGTH: usize = 1024;

/// Largest storable amount, `DECIMAL(12,2)`
pub fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

/// Composite identity of a line item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemKey {
    pub product_id: String,
    pub selected_size: String,
    pub selected_color: String,
}

impl LineItemKey {
    pub fn new(product_id: &str, selected_size: Option<&str>, selected_color: Option<&str>) -> Self {
        Self {
            product_id: product_id.trim().to_string(),
            selected_size: normalize_variant(selected_size),
            selected_color: normalize_variant(selected_color),
        }
    }
}

fn normalize_variant(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// A product snapshot with a chosen variant and quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    pub quantity: i32,
    #[serde(default)]
    pub selected_size: String,
    #[serde(default)]
    pub selected_color: String,
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    pub fn key(&self) -> LineItemKey {
        LineItemKey {
            product_id: self.product_id.clone(),
            selected_size: self.selected_size.clone(),
            selected_color: self.selected_color.clone(),
        }
    }

    pub fn matches(&self, key: &LineItemKey) -> bool {
        self.product_id == key.product_id
            && self.selected_size == key.selected_size
            && self.selected_color == key.selected_color
    }

    /// Price times quantity
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Request to add a line item to a cart or wishlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub key: LineItemKey,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    /// Requested quantity, at least 1
    pub quantity: i32,
}

impl NewLineItem {
    /// Materialize into a stored line item stamped with `added_at`
    pub fn into_line_item(self, added_at: DateTime<Utc>) -> LineItem {
        LineItem {
            product_id: self.key.product_id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity: self.quantity,
            selected_size: self.key.selected_size,
            selected_color: self.key.selected_color,
            added_at,
        }
    }
}
