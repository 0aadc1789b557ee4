//! Cart, wishlist and order endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{bearer, call, post_json, signed_in_user, TestContext};

fn add_item(product_id: &str, size: &str, color: &str, quantity: i32) -> serde_json::Value {
    json!({
        "productId": product_id,
        "name": "Linen Shirt",
        "price": 49.99,
        "image": "https://cdn.example.com/shirt.jpg",
        "quantity": quantity,
        "selectedSize": size,
        "selectedColor": color
    })
}

#[actix_web::test]
async fn test_cart_merges_same_variant() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (token, _) = signed_in_user(&app, "cart@example.com").await;

    call(&app, bearer(post_json("/api/user/cart", add_item("p1", "M", "Red", 1)), &token).to_request()).await;
    let (status, body) = call(
        &app,
        bearer(post_json("/api/user/cart", add_item("p1", "M", "Red", 2)), &token).to_request(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let cart = body["cart"].as_array().unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0]["quantity"], 3);
    assert_eq!(cart[0]["selectedSize"], "M");
}

#[actix_web::test]
async fn test_cart_keeps_variants_apart() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (token, _) = signed_in_user(&app, "cart@example.com").await;

    call(&app, bearer(post_json("/api/user/cart", add_item("p1", "M", "Red", 1)), &token).to_request()).await;
    let (_, body) = call(
        &app,
        bearer(post_json("/api/user/cart", add_item("p1", "L", "Red", 1)), &token).to_request(),
    )
    .await;
    assert_eq!(body["cart"].as_array().unwrap().len(), 2);

    let (status, body) = call(
        &app,
        bearer(test::TestRequest::get().uri("/api/user/cart"), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cart"][0]["selectedSize"], "M");
    assert_eq!(body["cart"][1]["selectedSize"], "L");
}

#[actix_web::test]
async fn test_cart_update_and_remove() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (token, _) = signed_in_user(&app, "cart@example.com").await;

    call(&app, bearer(post_json("/api/user/cart", add_item("p1", "M", "Red", 1)), &token).to_request()).await;
    call(&app, bearer(post_json("/api/user/cart", add_item("p2", "S", "Blue", 1)), &token).to_request()).await;

    let (status, body) = call(
        &app,
        bearer(
            test::TestRequest::put()
                .uri("/api/user/cart/p1")
                .set_json(json!({ "quantity": 5, "selectedSize": "M", "selectedColor": "Red" })),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cart"][0]["quantity"], 5);

    // Quantity zero removes the line
    let (_, body) = call(
        &app,
        bearer(
            test::TestRequest::put()
                .uri("/api/user/cart/p1")
                .set_json(json!({ "quantity": 0, "selectedSize": "M", "selectedColor": "Red" })),
            &token,
        )
        .to_request(),
    )
    .await;
    let cart = body["cart"].as_array().unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0]["productId"], "p2");

    let (status, body) = call(
        &app,
        bearer(
            test::TestRequest::delete().uri("/api/user/cart/p2?selectedSize=S&selectedColor=Blue"),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cart"], json!([]));

    let (status, body) = call(
        &app,
        bearer(
            test::TestRequest::delete().uri("/api/user/cart/p2?selectedSize=S&selectedColor=Blue"),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "item_not_found");
}

#[actix_web::test]
async fn test_cart_rejects_bad_items() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (token, _) = signed_in_user(&app, "cart@example.com").await;

    let (status, _) = call(
        &app,
        bearer(post_json("/api/user/cart", add_item("", "M", "Red", 1)), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        &app,
        bearer(post_json("/api/user/cart", add_item("p1", "M", "Red", 0)), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        &app,
        bearer(
            test::TestRequest::post()
                .uri("/api/user/cart")
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{not json"),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_cart_quantity_is_capped() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (token, _) = signed_in_user(&app, "bulk@example.com").await;

    call(&app, bearer(post_json("/api/user/cart", add_item("p1", "M", "Red", 999)), &token).to_request()).await;
    let (status, body) = call(
        &app,
        bearer(post_json("/api/user/cart", add_item("p1", "M", "Red", 1)), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cart"][0]["quantity"], 999);

    let (status, body) = call(
        &app,
        bearer(post_json("/api/user/cart", add_item("p1", "M", "Red", i32::MAX)), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = call(
        &app,
        bearer(
            test::TestRequest::put()
                .uri("/api/user/cart/p1")
                .set_json(json!({ "quantity": i32::MAX, "selectedSize": "M", "selectedColor": "Red" })),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_fields_wider_than_storage_are_rejected() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (token, _) = signed_in_user(&app, "wide@example.com").await;

    let long_color = "c".repeat(65);
    let (status, body) = call(
        &app,
        bearer(post_json("/api/user/cart", add_item("p1", "M", &long_color, 1)), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].get("selected_color").is_some());

    let mut pricey = add_item("p1", "M", "Red", 1);
    pricey["price"] = json!(100000000000.0);
    let (status, body) = call(
        &app,
        bearer(post_json("/api/user/wishlist", pricey), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, body) = call(
        &app,
        bearer(
            post_json(
                "/api/user/orders",
                json!({
                    "products": [add_item("p1", "M", &long_color, 1)],
                    "totalAmount": 49.99,
                    "paymentMethod": "card"
                }),
            ),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].get("products[0].selected_color").is_some());

    let mut negative = add_item("p1", "M", "Red", 1);
    negative["price"] = json!(-5);
    let (status, body) = call(
        &app,
        bearer(
            post_json(
                "/api/user/orders",
                json!({ "products": [negative], "totalAmount": 49.99, "paymentMethod": "card" }),
            ),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_order_data");
    assert_eq!(ctx.orders.count().await, 0);
}

#[actix_web::test]
async fn test_wishlist_add_is_idempotent() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (token, _) = signed_in_user(&app, "wish@example.com").await;

    for _ in 0..2 {
        let (status, body) = call(
            &app,
            bearer(post_json("/api/user/wishlist", add_item("p9", "", "", 1)), &token).to_request(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wishlist"].as_array().unwrap().len(), 1);
    }

    let (status, body) = call(
        &app,
        bearer(test::TestRequest::delete().uri("/api/user/wishlist/p9"), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wishlist"], json!([]));

    let (status, _) = call(
        &app,
        bearer(test::TestRequest::delete().uri("/api/user/wishlist/p9"), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_empty_order_is_rejected() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (token, _) = signed_in_user(&app, "buyer@example.com").await;

    let (status, body) = call(
        &app,
        bearer(
            post_json(
                "/api/user/orders",
                json!({ "products": [], "totalAmount": 10, "paymentMethod": "card" }),
            ),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_order_data");

    let (status, body) = call(
        &app,
        bearer(
            post_json(
                "/api/user/orders",
                json!({ "products": [add_item("p1", "M", "Red", 1)], "paymentMethod": "card" }),
            ),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_order_data");
    assert_eq!(ctx.orders.count().await, 0);
}

#[actix_web::test]
async fn test_place_order_clears_cart_and_records_history() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (token, _) = signed_in_user(&app, "buyer@example.com").await;

    call(&app, bearer(post_json("/api/user/cart", add_item("p1", "M", "Red", 2)), &token).to_request()).await;

    let (status, body) = call(
        &app,
        bearer(
            post_json(
                "/api/user/orders",
                json!({
                    "products": [add_item("p1", "M", "Red", 2)],
                    "totalAmount": 99.98,
                    "shippingAddress": {
                        "firstName": "Test",
                        "lastName": "Shopper",
                        "address": "1 Rua Augusta",
                        "city": "Lisbon",
                        "zipCode": "1100-048",
                        "country": "PT"
                    },
                    "paymentMethod": "card"
                }),
            ),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = body["order"]["orderId"].as_str().unwrap().to_string();
    assert_eq!(body["order"]["products"][0]["quantity"], 2);
    assert_eq!(body["order"]["shippingAddress"]["city"], "Lisbon");

    let (_, body) = call(
        &app,
        bearer(test::TestRequest::get().uri("/api/user/cart"), &token).to_request(),
    )
    .await;
    assert_eq!(body["cart"], json!([]));

    let (status, body) = call(
        &app,
        bearer(test::TestRequest::get().uri("/api/user/orders"), &token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);

    let (status, body) = call(
        &app,
        bearer(
            test::TestRequest::get().uri(&format!("/api/user/orders/{}", order_id)),
            &token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderId"], order_id.as_str());

    let confirmations: Vec<_> = ctx
        .emails
        .sent_to("buyer@example.com")
        .into_iter()
        .filter(|m| m.text_body.contains(&order_id))
        .collect();
    assert_eq!(confirmations.len(), 1);
}

#[actix_web::test]
async fn test_orders_are_private_to_their_owner() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (buyer, _) = signed_in_user(&app, "buyer@example.com").await;
    let (other, _) = signed_in_user(&app, "other@example.com").await;

    let (_, body) = call(
        &app,
        bearer(
            post_json(
                "/api/user/orders",
                json!({ "products": [add_item("p1", "M", "Red", 1)], "totalAmount": 49.99 }),
            ),
            &buyer,
        )
        .to_request(),
    )
    .await;
    let order_id = body["order"]["orderId"].as_str().unwrap().to_string();

    let (status, body) = call(
        &app,
        bearer(
            test::TestRequest::get().uri(&format!("/api/user/orders/{}", order_id)),
            &other,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "order_not_found");
}
