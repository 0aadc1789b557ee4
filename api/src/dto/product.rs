use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use sf_core::domain::entities::{NewProduct, Product, ProductPatch, ProductQuery, ProductSort, SortOrder};
use sf_shared::PageRequest;

use crate::handlers::ApiError;

/// Query string of `GET /products`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock: Option<bool>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TryFrom<ProductListQuery> for ProductQuery {
    type Error = ApiError;

    fn try_from(query: ProductListQuery) -> Result<Self, Self::Error> {
        let sort = match non_empty(query.sort) {
            Some(raw) => raw.parse::<ProductSort>().map_err(ApiError::BadRequest)?,
            None => ProductSort::default(),
        };
        let order = match non_empty(query.order) {
            Some(raw) => raw.parse::<SortOrder>().map_err(ApiError::BadRequest)?,
            None => SortOrder::default(),
        };

        Ok(ProductQuery {
            category: non_empty(query.category),
            min_price: query.min_price,
            max_price: query.max_price,
            in_stock: query.in_stock,
            search: non_empty(query.search),
            sort,
            order,
            page: PageRequest::new(query.page, query.limit),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `?limit=` for the featured and related listings
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u32>,
}

/// Body of `POST /products`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Product name is required and at most 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub brand: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Category is required and at most 100 characters"))]
    pub category: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: f64,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            brand: req.brand,
            category: req.category,
            price: req.price,
            original_price: req.original_price,
            images: req.images,
            sizes: req.sizes,
            colors: req.colors,
            stock: req.stock,
            featured: req.featured,
            rating: req.rating,
        }
    }
}

/// Body of `PUT /products/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateRequest {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub original_price: Option<Decimal>,
    pub images: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub stock: Option<i32>,
    pub featured: Option<bool>,
    pub rating: Option<f64>,
}

impl From<ProductUpdateRequest> for ProductPatch {
    fn from(req: ProductUpdateRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            brand: req.brand,
            category: req.category,
            price: req.price,
            original_price: req.original_price,
            images: req.images,
            sizes: req.sizes,
            colors: req.colors,
            stock: req.stock,
            featured: req.featured,
            rating: req.rating,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductMutationResponse {
    pub message: String,
    pub product: Product,
}
