//! Cart repository trait.
//!
//! Every mutation is a single atomic statement keyed on
//! `(user_id, product_id, selected_size, selected_color)`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::line_item::{LineItem, LineItemKey, NewLineItem};
use crate::errors::DomainError;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Cart contents in insertion order
    async fn list(&self, user_id: Uuid) -> Result<Vec<LineItem>, DomainError>;

    /// Insert the item, or add its quantity to an existing entry with the same
    /// key. The merged quantity never exceeds `MAX_QUANTITY`.
    async fn upsert_add(
        &self,
        user_id: Uuid,
        item: NewLineItem,
        added_at: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// Set the quantity of an existing entry. Returns `false` if the key is absent.
    async fn set_quantity(
        &self,
        user_id: Uuid,
        key: &LineItemKey,
        quantity: i32,
    ) -> Result<bool, DomainError>;

    /// Remove an entry. Returns `false` if the key is absent.
    async fn remove(&self, user_id: Uuid, key: &LineItemKey) -> Result<bool, DomainError>;
}
