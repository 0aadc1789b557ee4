use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use sf_core::domain::entities::{LineItem, LineItemKey, NewLineItem, NewOrder, Order, ShippingAddress};

const DEFAULT_QUANTITY: i32 = 1;

/// Body of `POST /user/cart` and `POST /user/wishlist`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddLineItemRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "Product ID is required and at most 64 characters"))]
    pub product_id: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub image: String,
    #[validate(range(min = 1, max = 999, message = "Quantity must be between 1 and 999"))]
    pub quantity: Option<i32>,
    #[validate(length(max = 64))]
    pub selected_size: Option<String>,
    #[validate(length(max = 64))]
    pub selected_color: Option<String>,
}

impl From<AddLineItemRequest> for NewLineItem {
    fn from(req: AddLineItemRequest) -> Self {
        Self {
            key: LineItemKey::new(
                &req.product_id,
                req.selected_size.as_deref(),
                req.selected_color.as_deref(),
            ),
            name: req.name,
            price: req.price,
            image: req.image,
            quantity: req.quantity.unwrap_or(DEFAULT_QUANTITY),
        }
    }
}

/// Body of `PUT /user/cart/{productId}`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    #[validate(range(max = 999, message = "Quantity must be at most 999"))]
    pub quantity: i32,
    pub selected_size: Option<String>,
    pub selected_color: Option<String>,
}

impl UpdateCartItemRequest {
    pub fn key(&self, product_id: &str) -> LineItemKey {
        LineItemKey::new(
            product_id,
            self.selected_size.as_deref(),
            self.selected_color.as_deref(),
        )
    }
}

/// Variant selection carried in the query string of `DELETE` item routes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantQuery {
    pub selected_size: Option<String>,
    pub selected_color: Option<String>,
}

impl VariantQuery {
    pub fn key(&self, product_id: &str) -> LineItemKey {
        LineItemKey::new(
            product_id,
            self.selected_size.as_deref(),
            self.selected_color.as_deref(),
        )
    }
}

/// One submitted order line; `addedAt` defaults to the time of the request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "Product ID is required and at most 64 characters"))]
    pub product_id: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub image: String,
    #[validate(range(min = 1, max = 999, message = "Quantity must be between 1 and 999"))]
    pub quantity: Option<i32>,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub selected_size: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub selected_color: String,
    pub added_at: Option<DateTime<Utc>>,
}

impl OrderLineRequest {
    fn into_line_item(self, now: DateTime<Utc>) -> LineItem {
        LineItem {
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity: self.quantity.unwrap_or(DEFAULT_QUANTITY),
            selected_size: self.selected_size,
            selected_color: self.selected_color,
            added_at: self.added_at.unwrap_or(now),
        }
    }
}

/// Body of `POST /user/orders`
///
/// Prices and the total are range-checked by the order service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    #[validate(nested)]
    pub products: Vec<OrderLineRequest>,
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub shipping_address: ShippingAddress,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub payment_method: String,
}

impl PlaceOrderRequest {
    pub fn into_new_order(self, now: DateTime<Utc>) -> NewOrder {
        NewOrder {
            products: self
                .products
                .into_iter()
                .map(|line| line.into_line_item(now))
                .collect(),
            total_amount: self.total_amount,
            shipping_address: self.shipping_address,
            payment_method: self.payment_method,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub message: String,
    pub cart: Vec<LineItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WishlistResponse {
    pub message: String,
    pub wishlist: Vec<LineItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub message: String,
    pub order: Order,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}
