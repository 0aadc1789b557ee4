//! Inputs and results of the account workflows

use crate::domain::entities::line_item::LineItem;
use crate::domain::entities::order::Order;
use crate::domain::entities::user::UserProfile;

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub accept_terms: bool,
}

/// Registration accepted; the client must come back with the code and `temp_data`
#[derive(Debug, Clone)]
pub struct RegistrationStarted {
    pub temp_data: String,
    /// Only populated outside production
    pub test_otp: Option<String>,
}

/// A code was (re)issued
#[derive(Debug, Clone)]
pub struct OtpIssued {
    pub test_otp: Option<String>,
}

/// Reset OTP verified; `reset_session` authorizes the password reset
#[derive(Debug, Clone)]
pub struct ResetSessionIssued {
    pub reset_session: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct ResetPasswordInput {
    pub email: String,
    pub reset_session: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Profile plus the user's collections
#[derive(Debug, Clone)]
pub struct AccountSnapshot {
    pub user: UserProfile,
    pub cart: Vec<LineItem>,
    pub wishlist: Vec<LineItem>,
    pub order_history: Vec<Order>,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    /// Session lifetime in seconds
    pub expires_in: i64,
    pub account: AccountSnapshot,
}
