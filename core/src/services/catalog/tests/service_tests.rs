//! Unit tests for the catalog service

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sf_shared::PageRequest;
use uuid::Uuid;

use crate::domain::entities::product::{
    NewProduct, Product, ProductPatch, ProductQuery, ProductSort, SortOrder,
};
use crate::errors::{CommerceError, DomainError, ValidationError};
use crate::repositories::MockProductRepository;
use crate::services::catalog::CatalogService;

fn product(name: &str, category: &str, price: i64, stock: i32, age_days: i64) -> Product {
    let mut product = Product::from_new(NewProduct {
        name: name.to_string(),
        category: category.to_string(),
        brand: "Atelier".to_string(),
        price: Decimal::new(price, 0),
        stock,
        featured: stock > 0,
        rating: 4.0,
        ..Default::default()
    });
    product.created_at = Utc::now() - Duration::days(age_days);
    product
}

async fn seeded() -> (CatalogService, Vec<Product>) {
    let products = vec![
        product("Linen Shirt", "shirts", 40, 5, 3),
        product("Oxford Shirt", "shirts", 60, 0, 2),
        product("Denim Jacket", "jackets", 120, 2, 1),
        product("Flannel Shirt", "shirts", 50, 8, 0),
    ];
    let repo = MockProductRepository::with_products(products.clone()).await;
    (CatalogService::new(Arc::new(repo)), products)
}

#[tokio::test]
async fn test_search_filters_and_sorts() {
    let (catalog, _) = seeded().await;
    let query = ProductQuery {
        category: Some("shirts".to_string()),
        in_stock: Some(true),
        sort: ProductSort::Price,
        order: SortOrder::Asc,
        ..Default::default()
    };

    let page = catalog.search(&query).await.unwrap();
    let names: Vec<&str> = page.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Linen Shirt", "Flannel Shirt"]);
    assert_eq!(page.pagination.total, 2);
}

#[tokio::test]
async fn test_search_text_is_case_insensitive() {
    let (catalog, _) = seeded().await;
    let query = ProductQuery {
        search: Some("DENIM".to_string()),
        ..Default::default()
    };

    let page = catalog.search(&query).await.unwrap();
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].name, "Denim Jacket");
}

#[tokio::test]
async fn test_search_pagination_computes_pages() {
    let (catalog, _) = seeded().await;
    let query = ProductQuery {
        page: PageRequest::new(Some(2), Some(3)),
        ..Default::default()
    };

    let page = catalog.search(&query).await.unwrap();
    assert_eq!(page.pagination.total, 4);
    assert_eq!(page.pagination.pages, 2);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.products.len(), 1);
    // Default sort is newest first, so the oldest product lands on page 2
    assert_eq!(page.products[0].name, "Linen Shirt");
}

#[tokio::test]
async fn test_search_rejects_inverted_price_range() {
    let (catalog, _) = seeded().await;
    let query = ProductQuery {
        min_price: Some(Decimal::new(100, 0)),
        max_price: Some(Decimal::new(10, 0)),
        ..Default::default()
    };
    assert!(matches!(
        catalog.search(&query).await,
        Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
    ));
}

#[tokio::test]
async fn test_related_excludes_product_itself() {
    let (catalog, products) = seeded().await;
    let related = catalog.related(products[0].id, None).await.unwrap();

    assert_eq!(related.len(), 2);
    assert!(related.iter().all(|p| p.category == "shirts"));
    assert!(related.iter().all(|p| p.id != products[0].id));
}

#[tokio::test]
async fn test_featured_respects_limit() {
    let (catalog, _) = seeded().await;
    let featured = catalog.featured(Some(2)).await.unwrap();
    assert_eq!(featured.len(), 2);
    assert!(featured.iter().all(|p| p.featured));
}

#[tokio::test]
async fn test_get_unknown_product() {
    let (catalog, _) = seeded().await;
    assert!(matches!(
        catalog.get(Uuid::new_v4()).await,
        Err(DomainError::Commerce(CommerceError::ProductNotFound))
    ));
    assert!(matches!(
        catalog.related(Uuid::new_v4(), None).await,
        Err(DomainError::Commerce(CommerceError::ProductNotFound))
    ));
}

#[tokio::test]
async fn test_create_validates_fields() {
    let catalog = CatalogService::new(Arc::new(MockProductRepository::new()));

    let blank_name = NewProduct {
        name: "  ".to_string(),
        category: "shirts".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        catalog.create(blank_name).await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));

    let negative = NewProduct {
        name: "Tee".to_string(),
        category: "shirts".to_string(),
        price: Decimal::new(-1, 0),
        ..Default::default()
    };
    assert!(matches!(
        catalog.create(negative).await,
        Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
    ));

    let too_expensive = NewProduct {
        name: "Tee".to_string(),
        category: "shirts".to_string(),
        price: Decimal::new(100_000_000_000, 0),
        ..Default::default()
    };
    assert!(matches!(
        catalog.create(too_expensive).await,
        Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
    ));

    let ok = catalog
        .create(NewProduct {
            name: "Tee".to_string(),
            category: "shirts".to_string(),
            stock: 3,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(ok.in_stock);
}

#[tokio::test]
async fn test_update_and_delete() {
    let (catalog, products) = seeded().await;
    let id = products[1].id;

    let updated = catalog
        .update(
            id,
            ProductPatch {
                stock: Some(4),
                price: Some(Decimal::new(55, 0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.in_stock);
    assert_eq!(updated.price, Decimal::new(55, 0));

    catalog.delete(id).await.unwrap();
    assert!(matches!(
        catalog.delete(id).await,
        Err(DomainError::Commerce(CommerceError::ProductNotFound))
    ));
    assert!(matches!(
        catalog.update(id, ProductPatch::default()).await,
        Err(DomainError::Commerce(CommerceError::ProductNotFound))
    ));
}
