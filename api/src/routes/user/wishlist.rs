use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::domain::entities::LineItem;

use crate::dto::user::{AddLineItemRequest, VariantQuery, WishlistResponse};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

fn wishlist_response(message: &str, wishlist: Vec<LineItem>) -> HttpResponse {
    HttpResponse::Ok().json(WishlistResponse {
        message: message.to_string(),
        wishlist,
    })
}

/// GET /api/user/wishlist
pub async fn list_wishlist(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let wishlist = state.wishlists.list(auth.user_id).await?;
    Ok(wishlist_response("Wishlist retrieved", wishlist))
}

/// POST /api/user/wishlist
///
/// Adding an item that is already present leaves the wishlist unchanged.
pub async fn add_to_wishlist(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<AddLineItemRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    let wishlist = state.wishlists.add(auth.user_id, request.into()).await?;
    Ok(wishlist_response("Item added to wishlist", wishlist))
}

/// DELETE /api/user/wishlist/{productId}?selectedSize=&selectedColor=
pub async fn remove_from_wishlist(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    variant: web::Query<VariantQuery>,
) -> Result<HttpResponse, ApiError> {
    let key = variant.key(&path);
    let wishlist = state.wishlists.remove(auth.user_id, &key).await?;
    Ok(wishlist_response("Item removed from wishlist", wishlist))
}
