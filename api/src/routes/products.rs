//! Product catalog endpoints
//!
//! Reads are public. Writes require a bearer token whose user is an admin.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use sf_core::domain::entities::ProductQuery;

use crate::dto::product::{
    LimitQuery, ProductListQuery, ProductMutationResponse, ProductRequest, ProductUpdateRequest,
    ProductsResponse,
};
use crate::dto::MessageResponse;
use crate::handlers::{path_error, ApiError};
use crate::middleware::{AuthContext, JwtAuth};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(list_products))
            .route("", web::post().to(create_product).wrap(JwtAuth::new()))
            .route("/featured", web::get().to(featured_products))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(update_product).wrap(JwtAuth::new()))
            .route("/{id}", web::delete().to(delete_product).wrap(JwtAuth::new()))
            .route("/{id}/related", web::get().to(related_products)),
    );
}

fn product_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| path_error("Product"))
}

/// GET /api/products
pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductListQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = ProductQuery::try_from(query.into_inner())?;
    let page = state.catalog.search(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /api/products/featured
pub async fn featured_products(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse, ApiError> {
    let products = state.catalog.featured(query.limit).await?;
    Ok(HttpResponse::Ok().json(ProductsResponse { products }))
}

/// GET /api/products/{id}
pub async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let product = state.catalog.get(product_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// GET /api/products/{id}/related
pub async fn related_products(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse, ApiError> {
    let products = state
        .catalog
        .related(product_id(&path)?, query.limit)
        .await?;
    Ok(HttpResponse::Ok().json(ProductsResponse { products }))
}

/// POST /api/products (admin)
pub async fn create_product(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, ApiError> {
    state.auth.require_admin(auth.user_id).await?;
    let request = body.into_inner();
    request.validate()?;

    let product = state.catalog.create(request.into()).await?;
    Ok(HttpResponse::Created().json(ProductMutationResponse {
        message: "Product created successfully".to_string(),
        product,
    }))
}

/// PUT /api/products/{id} (admin)
pub async fn update_product(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    body: web::Json<ProductUpdateRequest>,
) -> Result<HttpResponse, ApiError> {
    state.auth.require_admin(auth.user_id).await?;
    let id = product_id(&path)?;
    let request = body.into_inner();
    request.validate()?;

    let product = state.catalog.update(id, request.into()).await?;
    Ok(HttpResponse::Ok().json(ProductMutationResponse {
        message: "Product updated successfully".to_string(),
        product,
    }))
}

/// DELETE /api/products/{id} (admin)
pub async fn delete_product(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.auth.require_admin(auth.user_id).await?;
    state.catalog.delete(product_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Product deleted successfully")))
}
