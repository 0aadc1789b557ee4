//! Main cart service implementation

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::line_item::{
    max_amount, LineItem, LineItemKey, NewLineItem, MAX_IMAGE_LENGTH, MAX_KEY_PART_LENGTH,
    MAX_NAME_LENGTH, MAX_QUANTITY,
};
use crate::errors::{CommerceError, DomainResult, ValidationError};
use crate::repositories::CartRepository;

pub struct CartService {
    carts: Arc<dyn CartRepository>,
}

impl CartService {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    pub async fn list(&self, user_id: Uuid) -> DomainResult<Vec<LineItem>> {
        self.carts.list(user_id).await
    }

    /// Add a line, merging quantities with an existing line of the same key.
    /// A merged quantity is capped at [`MAX_QUANTITY`].
    pub async fn add(&self, user_id: Uuid, item: NewLineItem) -> DomainResult<Vec<LineItem>> {
        validate_item(&item)?;
        self.carts.upsert_add(user_id, item, Utc::now()).await?;
        self.carts.list(user_id).await
    }

    /// Set a line's quantity; zero or less removes the line
    pub async fn update_quantity(
        &self,
        user_id: Uuid,
        key: &LineItemKey,
        quantity: i32,
    ) -> DomainResult<Vec<LineItem>> {
        let found = if quantity <= 0 {
            self.carts.remove(user_id, key).await?
        } else {
            validate_quantity(quantity)?;
            self.carts.set_quantity(user_id, key, quantity).await?
        };
        if !found {
            return Err(CommerceError::ItemNotFound.into());
        }
        self.carts.list(user_id).await
    }

    pub async fn remove(&self, user_id: Uuid, key: &LineItemKey) -> DomainResult<Vec<LineItem>> {
        if !self.carts.remove(user_id, key).await? {
            return Err(CommerceError::ItemNotFound.into());
        }
        self.carts.list(user_id).await
    }
}

pub(crate) fn validate_item(item: &NewLineItem) -> Result<(), ValidationError> {
    validate_line(&item.key, &item.name, item.price, &item.image, item.quantity)
}

/// Field checks shared by cart, wishlist and order lines
pub(crate) fn validate_line(
    key: &LineItemKey,
    name: &str,
    price: Decimal,
    image: &str,
    quantity: i32,
) -> Result<(), ValidationError> {
    if key.product_id.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "productId".to_string(),
        });
    }
    for (field, value, max) in [
        ("productId", key.product_id.as_str(), MAX_KEY_PART_LENGTH),
        ("selectedSize", key.selected_size.as_str(), MAX_KEY_PART_LENGTH),
        ("selectedColor", key.selected_color.as_str(), MAX_KEY_PART_LENGTH),
        ("name", name, MAX_NAME_LENGTH),
        ("image", image, MAX_IMAGE_LENGTH),
    ] {
        if value.chars().count() > max {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: "0".to_string(),
                max: max.to_string(),
            });
        }
    }
    validate_quantity(quantity)?;
    if price < Decimal::ZERO || price > max_amount() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "0".to_string(),
            max: max_amount().to_string(),
        });
    }
    Ok(())
}

fn validate_quantity(quantity: i32) -> Result<(), ValidationError> {
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: "1".to_string(),
            max: MAX_QUANTITY.to_string(),
        });
    }
    Ok(())
}
