//! HTTP API for the storefront backend
//!
//! The binary in `main.rs` wires configuration, MySQL and email delivery into
//! [`state::AppState`] and serves [`app::create_app`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
