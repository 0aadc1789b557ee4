//! Authentication route handlers
//!
//! This module contains the public account endpoints:
//! - Registration with email OTP (register, verify, resend)
//! - Login
//! - Forgot password, reset OTP verification and password reset

pub mod login;
pub mod password;
pub mod register;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register::register))
            .route("/verify-otp", web::post().to(register::verify_otp))
            .route("/resend-otp", web::post().to(register::resend_otp))
            .route("/login", web::post().to(login::login))
            .route("/forgot-password", web::post().to(password::forgot_password))
            .route("/verify-reset-otp", web::post().to(password::verify_reset_otp))
            .route("/reset-password", web::post().to(password::reset_password)),
    );
}
