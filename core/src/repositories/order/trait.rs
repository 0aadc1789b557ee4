//! Order repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Append the order to the user's history and empty their cart as one
    /// atomic transition. Either both happen or neither does.
    async fn place_and_clear_cart(&self, order: &Order) -> Result<(), DomainError>;

    /// A user's orders, oldest first
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Order>, DomainError>;

    /// One order, only if it belongs to the user
    async fn find_for_user(
        &self,
        user_id: Uuid,
        order_id: &str,
    ) -> Result<Option<Order>, DomainError>;
}
