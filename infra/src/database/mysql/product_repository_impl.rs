//! MySQL implementation of the ProductRepository trait.
//!
//! Search builds its WHERE clause with [`QueryBuilder`]; the sort column comes
//! from a closed enum, every user value is bound.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use sf_core::domain::entities::product::{Product, ProductPatch, ProductQuery};
use sf_core::errors::DomainError;
use sf_core::repositories::ProductRepository;

use super::{column, db_error, uuid_column};

const PRODUCT_COLUMNS: &str = "id, name, description, brand, category, price, original_price, \
     images, sizes, colors, stock, in_stock, featured, rating, created_at, updated_at";

pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &MySqlRow) -> Result<Product, DomainError> {
        let images: Json<Vec<String>> = column(row, "images")?;
        let sizes: Json<Vec<String>> = column(row, "sizes")?;
        let colors: Json<Vec<String>> = column(row, "colors")?;

        Ok(Product {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            description: column(row, "description")?,
            brand: column(row, "brand")?,
            category: column(row, "category")?,
            price: column(row, "price")?,
            original_price: column(row, "original_price")?,
            images: images.0,
            sizes: sizes.0,
            colors: colors.0,
            stock: column(row, "stock")?,
            in_stock: column(row, "in_stock")?,
            featured: column(row, "featured")?,
            rating: column(row, "rating")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

/// Escape `LIKE` wildcards in user input
fn like_pattern(term: &str) -> String {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn push_filters(builder: &mut QueryBuilder<'_, MySql>, query: &ProductQuery) {
    builder.push(" WHERE 1 = 1");
    if let Some(category) = &query.category {
        builder.push(" AND category = ").push_bind(category.clone());
    }
    if let Some(min) = query.min_price {
        builder.push(" AND price >= ").push_bind(min);
    }
    if let Some(max) = query.max_price {
        builder.push(" AND price <= ").push_bind(max);
    }
    if query.in_stock == Some(true) {
        builder.push(" AND stock > 0");
    }
    if let Some(term) = query.search.as_deref().filter(|t| !t.trim().is_empty()) {
        let pattern = like_pattern(term.trim());
        builder
            .push(" AND (LOWER(name) LIKE ")
            .push_bind(pattern.clone())
            .push(" OR LOWER(description) LIKE ")
            .push_bind(pattern.clone())
            .push(" OR LOWER(brand) LIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn search(&self, query: &ProductQuery) -> Result<(Vec<Product>, u64), DomainError> {
        let mut count = QueryBuilder::<MySql>::new("SELECT COUNT(*) AS total FROM products");
        push_filters(&mut count, query);
        let row = count
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count products"))?;
        let total: i64 = column(&row, "total")?;

        let mut select = QueryBuilder::<MySql>::new(format!("SELECT {} FROM products", PRODUCT_COLUMNS));
        push_filters(&mut select, query);
        select
            .push(format!(
                " ORDER BY {} {}, id ASC LIMIT ",
                query.sort.column(),
                query.order.as_sql()
            ))
            .push_bind(query.page.limit)
            .push(" OFFSET ")
            .push_bind(query.page.offset());

        let rows = select
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to search products"))?;

        let products = rows
            .iter()
            .map(Self::row_to_product)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((products, total.max(0) as u64))
    }

    async fn featured(&self, limit: u32) -> Result<Vec<Product>, DomainError> {
        let query = format!(
            "SELECT {} FROM products WHERE featured = TRUE ORDER BY created_at DESC LIMIT ?",
            PRODUCT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to load featured products"))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let query = format!("SELECT {} FROM products WHERE id = ? LIMIT 1", PRODUCT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find product"))?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn related(&self, product: &Product, limit: u32) -> Result<Vec<Product>, DomainError> {
        let query = format!(
            "SELECT {} FROM products WHERE category = ? AND id <> ? ORDER BY created_at DESC LIMIT ?",
            PRODUCT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(&product.category)
            .bind(product.id.to_string())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to load related products"))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, description, brand, category, price, original_price,
                images, sizes, colors, stock, in_stock, featured, rating,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.brand)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.original_price)
        .bind(Json(&product.images))
        .bind(Json(&product.sizes))
        .bind(Json(&product.colors))
        .bind(product.stock)
        .bind(product.in_stock)
        .bind(product.featured)
        .bind(product.rating)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create product"))?;

        Ok(product)
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin product transaction"))?;

        let query = format!(
            "SELECT {} FROM products WHERE id = ? FOR UPDATE",
            PRODUCT_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to lock product"))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut product = Self::row_to_product(&row)?;
        product.apply(patch);

        sqlx::query(
            r#"
            UPDATE products SET
                name = ?, description = ?, brand = ?, category = ?, price = ?,
                original_price = ?, images = ?, sizes = ?, colors = ?, stock = ?,
                in_stock = ?, featured = ?, rating = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.brand)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.original_price)
        .bind(Json(&product.images))
        .bind(Json(&product.sizes))
        .bind(Json(&product.colors))
        .bind(product.stock)
        .bind(product.in_stock)
        .bind(product.featured)
        .bind(product.rating)
        .bind(product.updated_at)
        .bind(id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to update product"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit product transaction"))?;

        Ok(Some(product))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete product"))?;

        Ok(result.rows_affected() > 0)
    }
}
