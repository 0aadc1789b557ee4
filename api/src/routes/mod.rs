//! HTTP route handlers, grouped by resource.
//!
//! Everything except `/health` is mounted under `/api`.

pub mod auth;
pub mod health;
pub mod products;
pub mod user;

use actix_web::web;

/// Register the `/api` resources
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth::configure)
        .configure(products::configure)
        .configure(user::configure)
        .route("/health", web::get().to(health::health));
}
