use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::line_item::max_amount;
use crate::domain::entities::order::{NewOrder, Order, OrderStatus};
use crate::errors::{AuthError, CommerceError, DomainResult};
use crate::repositories::{OrderRepository, UserRepository};
use crate::services::cart::validate_line;
use crate::services::notification::Notifier;

const MAX_PAYMENT_METHOD_LENGTH: usize = 64;

pub struct OrderService {
    users: Arc<dyn UserRepository>,
    orders: Arc<dyn OrderRepository>,
    notifier: Arc<Notifier>,
}

impl OrderService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        orders: Arc<dyn OrderRepository>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            users,
            orders,
            notifier,
        }
    }

    /// Record the order and empty the cart in one step, then send a
    /// confirmation email.
    pub async fn place(&self, user_id: Uuid, input: NewOrder) -> DomainResult<Order> {
        let total_amount = validate(&input)?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let now = Utc::now();
        let order = Order {
            order_id: Order::generate_id(now),
            user_id,
            products: input.products,
            total_amount,
            order_date: now,
            status: OrderStatus::Processing,
            shipping_address: input.shipping_address,
            payment_method: input.payment_method,
        };

        self.orders.place_and_clear_cart(&order).await?;

        tracing::info!(
            event = "order_placed",
            user_id = %user_id,
            order_id = %order.order_id,
            items = order.item_count(),
            total = %order.total_amount,
            "Order placed"
        );

        self.notifier.order_confirmation(&user, &order).await;
        Ok(order)
    }

    /// Order history, oldest first
    pub async fn history(&self, user_id: Uuid) -> DomainResult<Vec<Order>> {
        self.orders.list_for_user(user_id).await
    }

    pub async fn get(&self, user_id: Uuid, order_id: &str) -> DomainResult<Order> {
        self.orders
            .find_for_user(user_id, order_id)
            .await?
            .ok_or_else(|| CommerceError::OrderNotFound.into())
    }
}

fn validate(input: &NewOrder) -> DomainResult<Decimal> {
    if input.products.is_empty() {
        return Err(invalid("order has no products"));
    }
    for (index, line) in input.products.iter().enumerate() {
        validate_line(&line.key(), &line.name, line.price, &line.image, line.quantity)
            .map_err(|err| invalid(&format!("products[{index}]: {err}")))?;
    }
    if input.payment_method.chars().count() > MAX_PAYMENT_METHOD_LENGTH {
        return Err(invalid("paymentMethod is too long"));
    }
    match input.total_amount {
        None => Err(invalid("totalAmount is required")),
        Some(total) if total < Decimal::ZERO || total > max_amount() => {
            Err(invalid("totalAmount is out of range"))
        }
        Some(total) => Ok(total),
    }
}

fn invalid(reason: &str) -> crate::errors::DomainError {
    CommerceError::InvalidOrderData {
        reason: reason.to_string(),
    }
    .into()
}
