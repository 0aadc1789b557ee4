//! MySQL implementation of the OrderRepository trait.
//!
//! Line items and the shipping address are stored as JSON snapshots.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::MySqlPool;
use uuid::Uuid;

use sf_core::domain::entities::line_item::LineItem;
use sf_core::domain::entities::order::{Order, OrderStatus, ShippingAddress};
use sf_core::errors::DomainError;
use sf_core::repositories::OrderRepository;

use super::{column, db_error, uuid_column};

const ORDER_COLUMNS: &str = "order_id, user_id, products, total_amount, order_date, status, \
     shipping_address, payment_method";

pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &MySqlRow) -> Result<Order, DomainError> {
        let products: Json<Vec<LineItem>> = column(row, "products")?;
        let shipping_address: Json<ShippingAddress> = column(row, "shipping_address")?;
        let status: String = column(row, "status")?;

        Ok(Order {
            order_id: column(row, "order_id")?,
            user_id: uuid_column(row, "user_id")?,
            products: products.0,
            total_amount: column(row, "total_amount")?,
            order_date: column(row, "order_date")?,
            status: status
                .parse::<OrderStatus>()
                .map_err(|message| DomainError::Internal { message })?,
            shipping_address: shipping_address.0,
            payment_method: column(row, "payment_method")?,
        })
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn place_and_clear_cart(&self, order: &Order) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin order transaction"))?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id, user_id, products, total_amount, order_date,
                status, shipping_address, payment_method
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&order.order_id)
        .bind(order.user_id.to_string())
        .bind(Json(&order.products))
        .bind(order.total_amount)
        .bind(order.order_date)
        .bind(order.status.as_str())
        .bind(Json(&order.shipping_address))
        .bind(&order.payment_method)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to insert order"))?;

        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(order.user_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to clear cart"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit order transaction"))?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Order>, DomainError> {
        let query = format!(
            "SELECT {} FROM orders WHERE user_id = ? ORDER BY id",
            ORDER_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list orders"))?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn find_for_user(
        &self,
        user_id: Uuid,
        order_id: &str,
    ) -> Result<Option<Order>, DomainError> {
        let query = format!(
            "SELECT {} FROM orders WHERE user_id = ? AND order_id = ? LIMIT 1",
            ORDER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find order"))?;

        row.as_ref().map(Self::row_to_order).transpose()
    }
}
