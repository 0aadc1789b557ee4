use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{
    ForgotPasswordRequest, OtpSentResponse, ResetPasswordRequest, ResetSessionResponse,
    VerifyResetOtpRequest,
};
use crate::dto::MessageResponse;
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /api/auth/forgot-password
pub async fn forgot_password(
    state: web::Data<AppState>,
    body: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let issued = state.auth.forgot_password(&body.email).await?;

    Ok(HttpResponse::Ok().json(OtpSentResponse {
        message: "A password reset code has been sent to your email.".to_string(),
        test_otp: issued.test_otp,
    }))
}

/// Handler for POST /api/auth/verify-reset-otp
///
/// Exchanges a valid reset code for a 15 minute `resetSession` token.
pub async fn verify_reset_otp(
    state: web::Data<AppState>,
    body: web::Json<VerifyResetOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let issued = state.auth.verify_reset_otp(&body.email, &body.otp).await?;

    Ok(HttpResponse::Ok().json(ResetSessionResponse {
        message: "OTP verified. You can now reset your password.".to_string(),
        reset_session: issued.reset_session,
        email: issued.email,
    }))
}

/// Handler for POST /api/auth/reset-password
pub async fn reset_password(
    state: web::Data<AppState>,
    body: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    state.auth.reset_password(request.into()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password has been reset successfully")))
}
