//! Wishlist repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::line_item::{LineItem, LineItemKey};
use crate::errors::DomainError;

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Wishlist contents in insertion order
    async fn list(&self, user_id: Uuid) -> Result<Vec<LineItem>, DomainError>;

    /// Insert unless an entry with the same key exists. Returns whether a row was added.
    async fn add_if_absent(&self, user_id: Uuid, item: LineItem) -> Result<bool, DomainError>;

    /// Remove an entry. Returns `false` if the key is absent.
    async fn remove(&self, user_id: Uuid, key: &LineItemKey) -> Result<bool, DomainError>;
}
