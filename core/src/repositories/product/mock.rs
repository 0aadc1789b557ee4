//! Mock implementation of ProductRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::product::{Product, ProductPatch, ProductQuery};
use crate::errors::DomainError;

use super::trait_::ProductRepository;

#[derive(Default)]
pub struct MockProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_products(products: Vec<Product>) -> Self {
        let repo = Self::new();
        *repo.products.write().await = products;
        repo
    }
}

fn newest_first(items: &mut [Product]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn search(&self, query: &ProductQuery) -> Result<(Vec<Product>, u64), DomainError> {
        let products = self.products.read().await;
        let mut hits: Vec<Product> = products.iter().filter(|p| query.matches(p)).cloned().collect();
        hits.sort_by(|a, b| query.compare(a, b));

        let total = hits.len() as u64;
        let page = hits
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn featured(&self, limit: u32) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        let mut featured: Vec<Product> = products.iter().filter(|p| p.featured).cloned().collect();
        newest_first(&mut featured);
        featured.truncate(limit as usize);
        Ok(featured)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn related(&self, product: &Product, limit: u32) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        let mut related: Vec<Product> = products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .cloned()
            .collect();
        newest_first(&mut related);
        related.truncate(limit as usize);
        Ok(related)
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, DomainError> {
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| p.id == id).map(|product| {
            product.apply(patch);
            product.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}
