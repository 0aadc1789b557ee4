use serde::{Deserialize, Serialize};
use validator::Validate;

use sf_core::domain::entities::line_item::LineItem;
use sf_core::domain::entities::order::Order;
use sf_core::domain::entities::user::UserProfile;
use sf_core::services::auth::{AccountSnapshot, RegisterInput, ResetPasswordInput};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub accept_terms: bool,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            accept_terms: req.accept_terms,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Registration data is required"))]
    pub temp_data: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Registration data is required"))]
    pub temp_data: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyResetOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Reset session is required"))]
    pub reset_session: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl From<ResetPasswordRequest> for ResetPasswordInput {
    fn from(req: ResetPasswordRequest) -> Self {
        Self {
            email: req.email,
            reset_session: req.reset_session,
            new_password: req.new_password,
            confirm_password: req.confirm_password,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub temp_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_otp: Option<String>,
}

/// Response of the endpoints that (re)issue a code
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpSentResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_otp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserCreatedResponse {
    pub message: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetSessionResponse {
    pub message: String,
    pub reset_session: String,
    pub email: String,
}

/// Profile plus cart, wishlist and order history
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub user: UserProfile,
    pub cart: Vec<LineItem>,
    pub wishlist: Vec<LineItem>,
    pub order_history: Vec<Order>,
}

impl From<AccountSnapshot> for AccountResponse {
    fn from(snapshot: AccountSnapshot) -> Self {
        Self {
            user: snapshot.user,
            cart: snapshot.cart,
            wishlist: snapshot.wishlist,
            order_history: snapshot.order_history,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    #[serde(flatten)]
    pub account: AccountResponse,
}
