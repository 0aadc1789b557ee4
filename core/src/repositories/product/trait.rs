//! Product repository trait for the catalog.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::product::{Product, ProductPatch, ProductQuery};
use crate::errors::DomainError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One page of products matching the query, plus the total match count
    async fn search(&self, query: &ProductQuery) -> Result<(Vec<Product>, u64), DomainError>;

    /// Featured products, newest first
    async fn featured(&self, limit: u32) -> Result<Vec<Product>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Other products in the same category, newest first
    async fn related(&self, product: &Product, limit: u32) -> Result<Vec<Product>, DomainError>;

    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    /// Apply a partial update. Returns `None` if the product does not exist.
    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, DomainError>;

    /// Returns whether a product was deleted
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
