use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /api/auth/login
///
/// Returns a session token together with the account snapshot
/// (`user`, `cart`, `wishlist`, `orderHistory`).
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let outcome = state.auth.login(&body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".to_string(),
        token: outcome.token,
        expires_in: outcome.expires_in,
        account: outcome.account.into(),
    }))
}
