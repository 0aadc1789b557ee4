//! Unit tests for order entity

use chrono::Utc;

use crate::domain::entities::order::{Order, OrderStatus, ShippingAddress};

#[test]
fn test_generate_id_format() {
    let now = Utc::now();
    let id = Order::generate_id(now);
    let parts: Vec<&str> = id.split('-').collect();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "ORD");
    assert_eq!(parts[1], now.timestamp_millis().to_string());
    assert_eq!(parts[2].len(), 9);
    assert!(parts[2]
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
}

#[test]
fn test_generated_ids_differ() {
    let now = Utc::now();
    assert_ne!(Order::generate_id(now), Order::generate_id(now));
}

#[test]
fn test_status_defaults_to_processing() {
    assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    assert_eq!(serde_json::to_value(OrderStatus::Processing).unwrap(), "Processing");
    assert_eq!("canceled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
    assert!("lost".parse::<OrderStatus>().is_err());
}

#[test]
fn test_shipping_address_keeps_extra_fields() {
    let json = serde_json::json!({
        "firstName": "Ada",
        "city": "London",
        "apartment": "4B"
    });
    let address: ShippingAddress = serde_json::from_value(json).unwrap();

    assert_eq!(address.first_name, "Ada");
    assert_eq!(address.city, "London");
    assert_eq!(address.extra["apartment"], "4B");

    let back = serde_json::to_value(&address).unwrap();
    assert_eq!(back["apartment"], "4B");
}
