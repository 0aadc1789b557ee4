//! MySQL implementation of the WishlistRepository trait.

use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use sf_core::domain::entities::line_item::{LineItem, LineItemKey};
use sf_core::errors::DomainError;
use sf_core::repositories::WishlistRepository;

use super::{db_error, row_to_line_item, LINE_ITEM_COLUMNS};

pub struct MySqlWishlistRepository {
    pool: MySqlPool,
}

impl MySqlWishlistRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for MySqlWishlistRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<LineItem>, DomainError> {
        let query = format!(
            "SELECT {} FROM wishlist_items WHERE user_id = ? ORDER BY id",
            LINE_ITEM_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list wishlist"))?;

        rows.iter().map(row_to_line_item).collect()
    }

    async fn add_if_absent(&self, user_id: Uuid, item: LineItem) -> Result<bool, DomainError> {
        let query = r#"
            INSERT IGNORE INTO wishlist_items (
                user_id, product_id, name, price, image, quantity,
                selected_size, selected_color, added_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(&item.product_id)
            .bind(&item.name)
            .bind(item.price)
            .bind(&item.image)
            .bind(item.quantity)
            .bind(&item.selected_size)
            .bind(&item.selected_color)
            .bind(item.added_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to add wishlist item"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, user_id: Uuid, key: &LineItemKey) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM wishlist_items
            WHERE user_id = ? AND product_id = ? AND selected_size = ? AND selected_color = ?
            "#,
        )
        .bind(user_id.to_string())
        .bind(&key.product_id)
        .bind(&key.selected_size)
        .bind(&key.selected_color)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to remove wishlist item"))?;

        Ok(result.rows_affected() > 0)
    }
}
