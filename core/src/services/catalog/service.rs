//! Catalog service implementation

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use sf_shared::PageMeta;
use uuid::Uuid;

use crate::domain::entities::line_item::max_amount;
use crate::domain::entities::product::{NewProduct, Product, ProductPatch, ProductQuery};
use crate::errors::{CommerceError, DomainResult, ValidationError};
use crate::repositories::ProductRepository;

pub const DEFAULT_FEATURED_LIMIT: u32 = 8;
pub const DEFAULT_RELATED_LIMIT: u32 = 4;
const MAX_LIST_LIMIT: u32 = 50;

/// One page of search results
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: PageMeta,
}

pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn search(&self, query: &ProductQuery) -> DomainResult<ProductPage> {
        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(ValidationError::OutOfRange {
                    field: "minPrice".to_string(),
                    min: "0".to_string(),
                    max: max.to_string(),
                }
                .into());
            }
        }

        let (products, total) = self.products.search(query).await?;
        Ok(ProductPage {
            products,
            pagination: PageMeta::new(query.page, total),
        })
    }

    pub async fn featured(&self, limit: Option<u32>) -> DomainResult<Vec<Product>> {
        self.products
            .featured(clamp_limit(limit, DEFAULT_FEATURED_LIMIT))
            .await
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| CommerceError::ProductNotFound.into())
    }

    /// Products from the same category, excluding `id` itself
    pub async fn related(&self, id: Uuid, limit: Option<u32>) -> DomainResult<Vec<Product>> {
        let product = self.get(id).await?;
        self.products
            .related(&product, clamp_limit(limit, DEFAULT_RELATED_LIMIT))
            .await
    }

    pub async fn create(&self, input: NewProduct) -> DomainResult<Product> {
        require_text(&input.name, "name")?;
        require_text(&input.category, "category")?;
        check_price(input.price, "price")?;
        if let Some(original) = input.original_price {
            check_price(original, "originalPrice")?;
        }
        check_stock(input.stock)?;
        check_rating(input.rating)?;

        let product = self.products.create(Product::from_new(input)).await?;
        tracing::info!(
            event = "product_created",
            product_id = %product.id,
            category = %product.category,
            "Product created"
        );
        Ok(product)
    }

    pub async fn update(&self, id: Uuid, patch: ProductPatch) -> DomainResult<Product> {
        if let Some(name) = &patch.name {
            require_text(name, "name")?;
        }
        if let Some(category) = &patch.category {
            require_text(category, "category")?;
        }
        if let Some(price) = patch.price {
            check_price(price, "price")?;
        }
        if let Some(original) = patch.original_price {
            check_price(original, "originalPrice")?;
        }
        if let Some(stock) = patch.stock {
            check_stock(stock)?;
        }
        if let Some(rating) = patch.rating {
            check_rating(rating)?;
        }

        let product = self
            .products
            .update(id, patch)
            .await?
            .ok_or(CommerceError::ProductNotFound)?;
        tracing::info!(event = "product_updated", product_id = %id, "Product updated");
        Ok(product)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.products.delete(id).await? {
            return Err(CommerceError::ProductNotFound.into());
        }
        tracing::info!(event = "product_deleted", product_id = %id, "Product deleted");
        Ok(())
    }
}

fn clamp_limit(limit: Option<u32>, default: u32) -> u32 {
    limit.unwrap_or(default).clamp(1, MAX_LIST_LIMIT)
}

fn require_text(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        }
        .into());
    }
    Ok(())
}

fn check_price(price: Decimal, field: &str) -> DomainResult<()> {
    if price < Decimal::ZERO || price > max_amount() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: "0".to_string(),
            max: max_amount().to_string(),
        }
        .into());
    }
    Ok(())
}

fn check_stock(stock: i32) -> DomainResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: "0".to_string(),
            max: i32::MAX.to_string(),
        }
        .into());
    }
    Ok(())
}

fn check_rating(rating: f64) -> DomainResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: "0".to_string(),
            max: "5".to_string(),
        }
        .into());
    }
    Ok(())
}
