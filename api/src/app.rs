//! Application factory
//!
//! Builds the actix-web [`App`] from a prepared [`AppState`]. Used by `main`
//! and by the integration tests, so both exercise the same router.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use sf_shared::{error_codes, CorsConfig, ErrorResponse};

use crate::handlers::{json_config, query_config};
use crate::middleware::{create_cors, SecurityHeaders};
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let security = SecurityHeaders::for_environment(state.environment);

    App::new()
        .app_data(state)
        .app_data(json_config(max_payload_size))
        .app_data(query_config())
        // Last registered runs first: tracing wraps CORS wraps security headers
        .wrap(security)
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(routes::health::health))
        .service(web::scope("/api").configure(routes::configure))
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
