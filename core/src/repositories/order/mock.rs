//! Mock implementation of OrderRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;
use crate::repositories::cart::{CartStore, MockCartRepository};

use super::trait_::OrderRepository;

/// In-memory order history that shares cart storage with a [`MockCartRepository`]
pub struct MockOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
    carts: CartStore,
}

impl MockOrderRepository {
    pub fn new(carts: &MockCartRepository) -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            carts: carts.store(),
        }
    }

    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn place_and_clear_cart(&self, order: &Order) -> Result<(), DomainError> {
        // Lock order: carts, then orders
        let mut carts = self.carts.write().await;
        let mut orders = self.orders.write().await;

        if orders.iter().any(|o| o.order_id == order.order_id) {
            return Err(DomainError::internal("duplicate order id"));
        }
        orders.push(order.clone());
        carts.remove(&order.user_id);
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_for_user(
        &self,
        user_id: Uuid,
        order_id: &str,
    ) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .find(|o| o.user_id == user_id && o.order_id == order_id)
            .cloned())
    }
}
