use actix_web::{web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use crate::dto::user::{OrderResponse, OrdersResponse, PlaceOrderRequest};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// POST /api/user/orders
///
/// Stores the order and empties the cart in one step.
pub async fn place_order(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    let order = state
        .orders
        .place(auth.user_id, request.into_new_order(Utc::now()))
        .await?;

    Ok(HttpResponse::Created().json(OrderResponse {
        message: "Order placed successfully".to_string(),
        order,
    }))
}

/// GET /api/user/orders
pub async fn order_history(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let orders = state.orders.history(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(OrdersResponse { orders }))
}

/// GET /api/user/orders/{orderId}
pub async fn get_order(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let order = state.orders.get(auth.user_id, &path).await?;
    Ok(HttpResponse::Ok().json(order))
}
