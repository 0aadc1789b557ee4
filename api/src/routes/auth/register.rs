use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_shared::validation::mask_email;

use crate::dto::auth::{
    OtpSentResponse, RegisterRequest, RegisterResponse, ResendOtpRequest, UserCreatedResponse,
    VerifyOtpRequest,
};
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /api/auth/register
///
/// Validates the registration, emails a 6-digit code and returns the signed
/// `tempData` that must accompany the code on verification.
///
/// # Request Body
///
/// ```json
/// {
///     "firstName": "Ada",
///     "lastName": "Lovelace",
///     "email": "ada@example.com",
///     "password": "secret1",
///     "acceptTerms": true
/// }
/// ```
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    tracing::debug!(email = %mask_email(&request.email), "Processing registration");
    let started = state.auth.register(request.into()).await?;

    Ok(HttpResponse::Ok().json(RegisterResponse {
        message: "Registration initiated. Please verify your email with the OTP sent.".to_string(),
        temp_data: started.temp_data,
        test_otp: started.test_otp,
    }))
}

/// Handler for POST /api/auth/verify-otp
///
/// Checks the code against the pending registration and creates the account.
pub async fn verify_otp(
    state: web::Data<AppState>,
    body: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let user = state
        .auth
        .verify_registration(&body.email, &body.otp, &body.temp_data)
        .await?;

    Ok(HttpResponse::Created().json(UserCreatedResponse {
        message: "Email verified. Your account has been created.".to_string(),
        user: user.profile(),
    }))
}

/// Handler for POST /api/auth/resend-otp
pub async fn resend_otp(
    state: web::Data<AppState>,
    body: web::Json<ResendOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let issued = state
        .auth
        .resend_registration_otp(&body.email, &body.temp_data)
        .await?;

    Ok(HttpResponse::Ok().json(OtpSentResponse {
        message: "A new OTP has been sent to your email.".to_string(),
        test_otp: issued.test_otp,
    }))
}
