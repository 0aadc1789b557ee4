//! Shared harness for the HTTP integration tests.
//!
//! Builds the real router over in-memory repositories with inline email
//! delivery, so tests can read the codes that were "sent".

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    test, web, App, Error,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use sf_api::app::create_app;
use sf_api::state::{AppState, Repositories};
use sf_core::domain::entities::{NewProduct, Product};
use sf_core::repositories::{
    MockCartRepository, MockOrderRepository, MockOtpRepository, MockProductRepository,
    MockUserRepository, MockWishlistRepository,
};
use sf_core::services::notification::RecordingEmailSender;
use sf_core::services::DeliveryMode;
use sf_shared::{AppConfig, CorsConfig};

pub const PASSWORD: &str = "secret123";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub users: Arc<MockUserRepository>,
    pub orders: Arc<MockOrderRepository>,
    pub emails: Arc<RecordingEmailSender>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_products(Vec::new()).await
    }

    pub async fn with_products(products: Vec<Product>) -> Self {
        let mut config = AppConfig::default();
        config.auth.bcrypt_cost = 4;

        let users = Arc::new(MockUserRepository::new());
        let carts = Arc::new(MockCartRepository::new());
        let orders = Arc::new(MockOrderRepository::new(&carts));
        let emails = Arc::new(RecordingEmailSender::new());

        let repos = Repositories {
            users: users.clone(),
            otps: Arc::new(MockOtpRepository::new()),
            carts,
            wishlists: Arc::new(MockWishlistRepository::new()),
            orders: orders.clone(),
            products: Arc::new(MockProductRepository::with_products(products).await),
        };

        let state = web::Data::new(AppState::build(
            repos,
            emails.clone(),
            &config,
            DeliveryMode::Inline,
        ));

        Self {
            state,
            users,
            orders,
            emails,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        create_app(self.state.clone(), &CorsConfig::development(), 256 * 1024)
    }
}

/// Send a request and decode the JSON body (`Value::Null` when empty)
pub async fn call<S, B>(app: &S, req: actix_http::Request) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    // Service errors are rendered into responses the same way the HTTP
    // dispatcher does in a running server.
    let (status, bytes) = match test::try_call_service(app, req).await {
        Ok(resp) => (resp.status(), test::read_body(resp).await),
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let bytes = actix_web::body::to_bytes(resp.into_body())
                .await
                .unwrap_or_default();
            (status, bytes)
        }
    };
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}

pub fn post_json(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

pub fn bearer(req: test::TestRequest, token: &str) -> test::TestRequest {
    req.insert_header(("Authorization", format!("Bearer {}", token)))
}

/// Start a registration and return `(tempData, testOtp)`
pub async fn start_registration<S, B>(app: &S, email: &str) -> (String, String)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let (status, body) = call(
        app,
        post_json(
            "/api/auth/register",
            json!({
                "firstName": "Test",
                "lastName": "Shopper",
                "email": email,
                "password": PASSWORD,
                "acceptTerms": true
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {}", body);

    (
        body["tempData"].as_str().unwrap().to_string(),
        body["testOtp"].as_str().unwrap().to_string(),
    )
}

/// Register, verify and log in; returns `(token, user id)`
pub async fn signed_in_user<S, B>(app: &S, email: &str) -> (String, String)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let (temp_data, otp) = start_registration(app, email).await;
    let (status, body) = call(
        app,
        post_json(
            "/api/auth/verify-otp",
            json!({ "email": email, "otp": otp, "tempData": temp_data }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "verify failed: {}", body);
    let user_id = body["user"]["id"].as_str().unwrap().to_string();

    let (status, body) = call(
        app,
        post_json("/api/auth/login", json!({ "email": email, "password": PASSWORD })).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);

    (body["token"].as_str().unwrap().to_string(), user_id)
}

pub fn sample_product(name: &str, category: &str, price: i64) -> Product {
    Product::from_new(NewProduct {
        name: name.to_string(),
        description: format!("{} description", name),
        brand: "Atelier".to_string(),
        category: category.to_string(),
        price: Decimal::new(price, 0),
        images: vec![format!("https://cdn.example.com/{}.jpg", name)],
        sizes: vec!["S".to_string(), "M".to_string()],
        colors: vec!["Black".to_string()],
        stock: 10,
        rating: 4.0,
        ..NewProduct::default()
    })
}
