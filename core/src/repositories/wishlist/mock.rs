//! Mock implementation of WishlistRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::line_item::{LineItem, LineItemKey};
use crate::errors::DomainError;

use super::trait_::WishlistRepository;

#[derive(Default)]
pub struct MockWishlistRepository {
    wishlists: Arc<RwLock<HashMap<Uuid, Vec<LineItem>>>>,
}

impl MockWishlistRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WishlistRepository for MockWishlistRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<LineItem>, DomainError> {
        let wishlists = self.wishlists.read().await;
        Ok(wishlists.get(&user_id).cloned().unwrap_or_default())
    }

    async fn add_if_absent(&self, user_id: Uuid, item: LineItem) -> Result<bool, DomainError> {
        let mut wishlists = self.wishlists.write().await;
        let list = wishlists.entry(user_id).or_default();
        let key = item.key();
        if list.iter().any(|line| line.matches(&key)) {
            return Ok(false);
        }
        list.push(item);
        Ok(true)
    }

    async fn remove(&self, user_id: Uuid, key: &LineItemKey) -> Result<bool, DomainError> {
        let mut wishlists = self.wishlists.write().await;
        let Some(list) = wishlists.get_mut(&user_id) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|line| !line.matches(key));
        Ok(list.len() < before)
    }
}
