//! Mock implementation of CartRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::line_item::{LineItem, LineItemKey, NewLineItem, MAX_QUANTITY};
use crate::errors::DomainError;

use super::trait_::CartRepository;

pub(crate) type CartStore = Arc<RwLock<HashMap<Uuid, Vec<LineItem>>>>;

#[derive(Default)]
pub struct MockCartRepository {
    carts: CartStore,
}

impl MockCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle on the underlying storage, shared with the order mock so that
    /// placing an order can clear the cart under the same lock.
    pub(crate) fn store(&self) -> CartStore {
        Arc::clone(&self.carts)
    }
}

#[async_trait]
impl CartRepository for MockCartRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<LineItem>, DomainError> {
        let carts = self.carts.read().await;
        Ok(carts.get(&user_id).cloned().unwrap_or_default())
    }

    async fn upsert_add(
        &self,
        user_id: Uuid,
        item: NewLineItem,
        added_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let mut carts = self.carts.write().await;
        let cart = carts.entry(user_id).or_default();
        match cart.iter_mut().find(|line| line.matches(&item.key)) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .saturating_add(item.quantity)
                    .min(MAX_QUANTITY)
            }
            None => cart.push(item.into_line_item(added_at)),
        }
        Ok(())
    }

    async fn set_quantity(
        &self,
        user_id: Uuid,
        key: &LineItemKey,
        quantity: i32,
    ) -> Result<bool, DomainError> {
        let mut carts = self.carts.write().await;
        let line = carts
            .get_mut(&user_id)
            .and_then(|cart| cart.iter_mut().find(|line| line.matches(key)));
        match line {
            Some(line) => {
                line.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, user_id: Uuid, key: &LineItemKey) -> Result<bool, DomainError> {
        let mut carts = self.carts.write().await;
        let Some(cart) = carts.get_mut(&user_id) else {
            return Ok(false);
        };
        let before = cart.len();
        cart.retain(|line| !line.matches(key));
        Ok(cart.len() < before)
    }
}
