//! Authenticated customer endpoints under `/user`
//!
//! Every route in this scope runs behind [`JwtAuth`].

pub mod cart;
pub mod orders;
pub mod profile;
pub mod wishlist;

use actix_web::web;

use crate::middleware::JwtAuth;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .wrap(JwtAuth::new())
            .route("/profile", web::get().to(profile::profile))
            .route("/change-password", web::post().to(profile::change_password))
            .route("/cart", web::get().to(cart::list_cart))
            .route("/cart", web::post().to(cart::add_to_cart))
            .route("/cart/{product_id}", web::put().to(cart::update_cart_item))
            .route("/cart/{product_id}", web::delete().to(cart::remove_from_cart))
            .route("/wishlist", web::get().to(wishlist::list_wishlist))
            .route("/wishlist", web::post().to(wishlist::add_to_wishlist))
            .route("/wishlist/{product_id}", web::delete().to(wishlist::remove_from_wishlist))
            .route("/orders", web::get().to(orders::order_history))
            .route("/orders", web::post().to(orders::place_order))
            .route("/orders/{order_id}", web::get().to(orders::get_order)),
    );
}
