//! Unit tests for cart service

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::line_item::{LineItemKey, NewLineItem, MAX_QUANTITY};
use crate::errors::{CommerceError, DomainError, ValidationError};
use crate::repositories::MockCartRepository;
use crate::services::cart::CartService;

fn service() -> CartService {
    CartService::new(Arc::new(MockCartRepository::new()))
}

fn item(size: &str, color: &str, quantity: i32) -> NewLineItem {
    NewLineItem {
        key: LineItemKey::new("p1", Some(size), Some(color)),
        name: "Linen Shirt".to_string(),
        price: Decimal::new(4999, 2),
        image: "/img/p1.jpg".to_string(),
        quantity,
    }
}

#[tokio::test]
async fn test_same_key_merges_quantities() {
    let cart = service();
    let user = Uuid::new_v4();

    cart.add(user, item("M", "Red", 1)).await.unwrap();
    let lines = cart.add(user, item("M", "Red", 2)).await.unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 3);
}

#[tokio::test]
async fn test_different_variant_is_separate_line() {
    let cart = service();
    let user = Uuid::new_v4();

    cart.add(user, item("M", "Red", 1)).await.unwrap();
    let lines = cart.add(user, item("L", "Red", 1)).await.unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].selected_size, "M");
    assert_eq!(lines[1].selected_size, "L");
}

#[tokio::test]
async fn test_update_quantity_sets_value() {
    let cart = service();
    let user = Uuid::new_v4();
    cart.add(user, item("M", "Red", 1)).await.unwrap();

    let key = LineItemKey::new("p1", Some("M"), Some("Red"));
    let lines = cart.update_quantity(user, &key, 5).await.unwrap();
    assert_eq!(lines[0].quantity, 5);
}

#[tokio::test]
async fn test_update_to_zero_removes_exactly_one_line() {
    let cart = service();
    let user = Uuid::new_v4();
    cart.add(user, item("M", "Red", 1)).await.unwrap();
    cart.add(user, item("L", "Red", 1)).await.unwrap();

    let key = LineItemKey::new("p1", Some("M"), Some("Red"));
    let lines = cart.update_quantity(user, &key, 0).await.unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].selected_size, "L");
}

#[tokio::test]
async fn test_missing_line_is_item_not_found() {
    let cart = service();
    let user = Uuid::new_v4();
    cart.add(user, item("M", "Red", 1)).await.unwrap();
    let other = LineItemKey::new("p1", Some("M"), Some("Blue"));

    assert!(matches!(
        cart.update_quantity(user, &other, 2).await,
        Err(DomainError::Commerce(CommerceError::ItemNotFound))
    ));
    assert!(matches!(
        cart.update_quantity(user, &other, 0).await,
        Err(DomainError::Commerce(CommerceError::ItemNotFound))
    ));
    assert!(matches!(
        cart.remove(user, &other).await,
        Err(DomainError::Commerce(CommerceError::ItemNotFound))
    ));
}

#[tokio::test]
async fn test_remove_line() {
    let cart = service();
    let user = Uuid::new_v4();
    cart.add(user, item("M", "Red", 1)).await.unwrap();

    let lines = cart
        .remove(user, &LineItemKey::new("p1", Some("M"), Some("Red")))
        .await
        .unwrap();
    assert!(lines.is_empty());
}

#[tokio::test]
async fn test_rejects_non_positive_quantity() {
    let cart = service();
    assert!(matches!(
        cart.add(Uuid::new_v4(), item("M", "Red", 0)).await,
        Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
    ));
}

#[tokio::test]
async fn test_merge_past_the_cap_is_clamped() {
    let cart = service();
    let user = Uuid::new_v4();

    cart.add(user, item("M", "Red", MAX_QUANTITY)).await.unwrap();
    let lines = cart.add(user, item("M", "Red", 1)).await.unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, MAX_QUANTITY);
}

#[tokio::test]
async fn test_rejects_quantity_above_cap() {
    let cart = service();
    let user = Uuid::new_v4();

    assert!(matches!(
        cart.add(user, item("M", "Red", i32::MAX)).await,
        Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
    ));

    cart.add(user, item("M", "Red", 1)).await.unwrap();
    let key = LineItemKey::new("p1", Some("M"), Some("Red"));
    assert!(matches!(
        cart.update_quantity(user, &key, MAX_QUANTITY + 1).await,
        Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
    ));
    assert_eq!(cart.list(user).await.unwrap()[0].quantity, 1);
}

#[tokio::test]
async fn test_rejects_fields_wider_than_storage() {
    let cart = service();
    let user = Uuid::new_v4();

    let mut long_color = item("M", "Red", 1);
    long_color.key.selected_color = "c".repeat(65);
    let mut long_name = item("M", "Red", 1);
    long_name.name = "n".repeat(256);
    let mut huge_price = item("M", "Red", 1);
    huge_price.price = Decimal::new(100_000_000_000, 0);
    let mut negative_price = item("M", "Red", 1);
    negative_price.price = Decimal::new(-1, 0);

    for bad in [long_color, long_name, huge_price, negative_price] {
        assert!(matches!(
            cart.add(user, bad).await,
            Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
        ));
    }
    assert!(cart.list(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_variant_case_is_significant() {
    let cart = service();
    let user = Uuid::new_v4();

    cart.add(user, item("M", "Red", 1)).await.unwrap();
    let lines = cart.add(user, item("m", "red", 1)).await.unwrap();
    assert_eq!(lines.len(), 2);

    let lines = cart
        .remove(user, &LineItemKey::new("p1", Some("m"), Some("red")))
        .await
        .unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].selected_color, "Red");
}

#[tokio::test]
async fn test_carts_are_per_user() {
    let cart = service();
    let (ada, eve) = (Uuid::new_v4(), Uuid::new_v4());
    cart.add(ada, item("M", "Red", 1)).await.unwrap();

    assert!(cart.list(eve).await.unwrap().is_empty());
}
