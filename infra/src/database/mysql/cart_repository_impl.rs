//! MySQL implementation of the CartRepository trait.
//!
//! Merging on the composite key is a single `INSERT ... ON DUPLICATE KEY
//! UPDATE` against `uq_cart_line`. The merged quantity is capped at
//! `MAX_QUANTITY`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use sf_core::domain::entities::line_item::{LineItem, LineItemKey, NewLineItem, MAX_QUANTITY};
use sf_core::errors::DomainError;
use sf_core::repositories::CartRepository;

use super::{db_error, row_to_line_item, LINE_ITEM_COLUMNS};

pub struct MySqlCartRepository {
    pool: MySqlPool,
}

impl MySqlCartRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for MySqlCartRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<LineItem>, DomainError> {
        let query = format!(
            "SELECT {} FROM cart_items WHERE user_id = ? ORDER BY id",
            LINE_ITEM_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list cart"))?;

        rows.iter().map(row_to_line_item).collect()
    }

    async fn upsert_add(
        &self,
        user_id: Uuid,
        item: NewLineItem,
        added_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO cart_items (
                user_id, product_id, name, price, image, quantity,
                selected_size, selected_color, added_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE quantity = LEAST(quantity + ?, ?)
        "#;

        sqlx::query(query)
            .bind(user_id.to_string())
            .bind(&item.key.product_id)
            .bind(&item.name)
            .bind(item.price)
            .bind(&item.image)
            .bind(item.quantity)
            .bind(&item.key.selected_size)
            .bind(&item.key.selected_color)
            .bind(added_at)
            .bind(item.quantity)
            .bind(MAX_QUANTITY)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to add cart item"))?;

        Ok(())
    }

    async fn set_quantity(
        &self,
        user_id: Uuid,
        key: &LineItemKey,
        quantity: i32,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE cart_items
            SET quantity = ?
            WHERE user_id = ? AND product_id = ? AND selected_size = ? AND selected_color = ?
        "#;

        let result = sqlx::query(query)
            .bind(quantity)
            .bind(user_id.to_string())
            .bind(&key.product_id)
            .bind(&key.selected_size)
            .bind(&key.selected_color)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update cart quantity"))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        // Zero affected rows can also mean the quantity was already equal
        self.exists(user_id, key).await
    }

    async fn remove(&self, user_id: Uuid, key: &LineItemKey) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM cart_items
            WHERE user_id = ? AND product_id = ? AND selected_size = ? AND selected_color = ?
            "#,
        )
        .bind(user_id.to_string())
        .bind(&key.product_id)
        .bind(&key.selected_size)
        .bind(&key.selected_color)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to remove cart item"))?;

        Ok(result.rows_affected() > 0)
    }
}

impl MySqlCartRepository {
    async fn exists(&self, user_id: Uuid, key: &LineItemKey) -> Result<bool, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT 1 FROM cart_items
            WHERE user_id = ? AND product_id = ? AND selected_size = ? AND selected_color = ?
            LIMIT 1
            "#,
        )
        .bind(user_id.to_string())
        .bind(&key.product_id)
        .bind(&key.selected_size)
        .bind(&key.selected_color)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to look up cart item"))?;

        Ok(row.is_some())
    }
}
