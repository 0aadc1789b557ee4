//! Wishlist service: idempotent saves keyed like cart lines

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::line_item::{LineItem, LineItemKey, NewLineItem};
use crate::errors::{CommerceError, DomainResult};
use crate::repositories::WishlistRepository;
use crate::services::cart::validate_item;

pub struct WishlistService {
    wishlists: Arc<dyn WishlistRepository>,
}

impl WishlistService {
    pub fn new(wishlists: Arc<dyn WishlistRepository>) -> Self {
        Self { wishlists }
    }

    pub async fn list(&self, user_id: Uuid) -> DomainResult<Vec<LineItem>> {
        self.wishlists.list(user_id).await
    }

    /// Save an item; saving the same key again is a silent no-op
    pub async fn add(&self, user_id: Uuid, item: NewLineItem) -> DomainResult<Vec<LineItem>> {
        validate_item(&item)?;
        self.wishlists
            .add_if_absent(user_id, item.into_line_item(Utc::now()))
            .await?;
        self.wishlists.list(user_id).await
    }

    pub async fn remove(&self, user_id: Uuid, key: &LineItemKey) -> DomainResult<Vec<LineItem>> {
        if !self.wishlists.remove(user_id, key).await? {
            return Err(CommerceError::ItemNotFound.into());
        }
        self.wishlists.list(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use crate::repositories::MockWishlistRepository;
    use rust_decimal::Decimal;

    fn item(product_id: &str, color: &str) -> NewLineItem {
        NewLineItem {
            key: LineItemKey::new(product_id, Some("M"), Some(color)),
            name: "Silk Scarf".to_string(),
            price: Decimal::new(3500, 2),
            image: String::new(),
            quantity: 1,
        }
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let service = WishlistService::new(Arc::new(MockWishlistRepository::new()));
        let user = Uuid::new_v4();

        service.add(user, item("p1", "Red")).await.unwrap();
        let list = service.add(user, item("p1", "Red")).await.unwrap();
        assert_eq!(list.len(), 1);

        let list = service.add(user, item("p1", "Blue")).await.unwrap();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_missing_item() {
        let service = WishlistService::new(Arc::new(MockWishlistRepository::new()));
        let user = Uuid::new_v4();
        service.add(user, item("p1", "Red")).await.unwrap();

        let result = service
            .remove(user, &LineItemKey::new("p2", Some("M"), Some("Red")))
            .await;
        assert!(matches!(
            result,
            Err(DomainError::Commerce(CommerceError::ItemNotFound))
        ));

        let list = service
            .remove(user, &LineItemKey::new("p1", Some("M"), Some("Red")))
            .await
            .unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_color_case_makes_a_distinct_entry() {
        let service = WishlistService::new(Arc::new(MockWishlistRepository::new()));
        let user = Uuid::new_v4();

        service.add(user, item("p1", "Red")).await.unwrap();
        let list = service.add(user, item("p1", "red")).await.unwrap();
        assert_eq!(list.len(), 2);
    }
}
