use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::domain::entities::LineItem;

use crate::dto::user::{AddLineItemRequest, CartResponse, UpdateCartItemRequest, VariantQuery};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

fn cart_response(message: &str, cart: Vec<LineItem>) -> HttpResponse {
    HttpResponse::Ok().json(CartResponse {
        message: message.to_string(),
        cart,
    })
}

/// GET /api/user/cart
pub async fn list_cart(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let cart = state.carts.list(auth.user_id).await?;
    Ok(cart_response("Cart retrieved", cart))
}

/// POST /api/user/cart
///
/// Adding a variant already in the cart increases its quantity.
pub async fn add_to_cart(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<AddLineItemRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    let cart = state.carts.add(auth.user_id, request.into()).await?;
    Ok(cart_response("Item added to cart", cart))
}

/// PUT /api/user/cart/{productId}
///
/// Variant travels in the body. A quantity of zero or less removes the item.
pub async fn update_cart_item(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    body: web::Json<UpdateCartItemRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let key = body.key(&path);
    let cart = state
        .carts
        .update_quantity(auth.user_id, &key, body.quantity)
        .await?;
    Ok(cart_response("Cart updated", cart))
}

/// DELETE /api/user/cart/{productId}?selectedSize=&selectedColor=
pub async fn remove_from_cart(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    variant: web::Query<VariantQuery>,
) -> Result<HttpResponse, ApiError> {
    let key = variant.key(&path);
    let cart = state.carts.remove(auth.user_id, &key).await?;
    Ok(cart_response("Item removed from cart", cart))
}
