//! Unit tests for the notifier

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::line_item::{LineItemKey, NewLineItem};
use crate::domain::entities::order::{Order, OrderStatus, ShippingAddress};
use crate::domain::entities::otp::OtpPurpose;
use crate::domain::entities::user::User;
use crate::services::notification::{DeliveryMode, Notifier, NotifierConfig, RecordingEmailSender};

fn notifier(sender: Arc<RecordingEmailSender>) -> Notifier {
    Notifier::new(
        sender,
        NotifierConfig {
            brand: "Maison".to_string(),
            frontend_url: "https://shop.example.com".to_string(),
            delivery: DeliveryMode::Inline,
        },
    )
}

#[tokio::test]
async fn test_otp_email_contains_code_and_expiry() {
    let sender = Arc::new(RecordingEmailSender::new());
    notifier(sender.clone())
        .otp_code("ada@example.com", "482913", OtpPurpose::Registration, 10)
        .await;

    let sent = sender.sent_to("ada@example.com");
    assert_eq!(sent.len(), 1);
    assert!(sent[0].subject.contains("Verify your email"));
    assert!(sent[0].text_body.contains("482913"));
    assert!(sent[0].text_body.contains("10 minutes"));
    assert!(sent[0].html_body.contains("482913"));
}

#[tokio::test]
async fn test_order_confirmation_lists_items() {
    let sender = Arc::new(RecordingEmailSender::new());
    let user = User::new("Ada", "Lovelace", "ada@example.com", "hash".to_string(), true);
    let item = NewLineItem {
        key: LineItemKey::new("p1", Some("M"), Some("Red")),
        name: "Wool <Coat>".to_string(),
        price: Decimal::new(12000, 2),
        image: String::new(),
        quantity: 2,
    }
    .into_line_item(Utc::now());
    let order = Order {
        order_id: "ORD-1-ABCDEFGHI".to_string(),
        user_id: Uuid::new_v4(),
        products: vec![item],
        total_amount: Decimal::new(24000, 2),
        order_date: Utc::now(),
        status: OrderStatus::Processing,
        shipping_address: ShippingAddress {
            city: "London".to_string(),
            ..Default::default()
        },
        payment_method: "card".to_string(),
    };

    notifier(sender.clone()).order_confirmation(&user, &order).await;

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].subject.contains("ORD-1-ABCDEFGHI"));
    assert!(sent[0].text_body.contains("Wool <Coat> M / Red x2"));
    assert!(sent[0].html_body.contains("Wool &lt;Coat&gt;"));
    assert!(sent[0].text_body.contains("London"));
}

#[tokio::test]
async fn test_delivery_failure_is_swallowed() {
    let sender = Arc::new(RecordingEmailSender::failing());
    notifier(sender.clone()).password_changed("ada@example.com").await;
    assert!(sender.sent().is_empty());
}
