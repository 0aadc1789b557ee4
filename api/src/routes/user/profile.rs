use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AccountResponse, ChangePasswordRequest};
use crate::dto::MessageResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// GET /api/user/profile
pub async fn profile(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let snapshot = state.auth.profile(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(AccountResponse::from(snapshot)))
}

/// POST /api/user/change-password
pub async fn change_password(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    state
        .auth
        .change_password(auth.user_id, &body.current_password, &body.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password changed successfully")))
}
