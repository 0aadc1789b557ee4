//! Catalog product entity and query model.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sf_shared::PageRequest;
use uuid::Uuid;

/// A product in the storefront catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub stock: i32,
    /// Mirrors `stock > 0`
    pub in_stock: bool,
    pub featured: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a product
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub stock: i32,
    pub featured: bool,
    pub rating: f64,
}

/// Partial update; `None` leaves a field untouched
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
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

impl Product {
    pub fn from_new(new: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: new.name.trim().to_string(),
            description: new.description,
            brand: new.brand,
            category: new.category.trim().to_string(),
            price: new.price,
            original_price: new.original_price,
            images: new.images,
            sizes: new.sizes,
            colors: new.colors,
            in_stock: new.stock > 0,
            stock: new.stock,
            featured: new.featured,
            rating: new.rating,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and bump `updated_at`
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(category) = patch.category {
            self.category = category.trim().to_string();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if patch.original_price.is_some() {
            self.original_price = patch.original_price;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(sizes) = patch.sizes {
            self.sizes = sizes;
        }
        if let Some(colors) = patch.colors {
            self.colors = colors;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
            self.in_stock = stock > 0;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        self.updated_at = Utc::now();
    }
}

/// Sortable catalog fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    Price,
    Name,
    #[default]
    CreatedAt,
    Rating,
}

impl ProductSort {
    /// Column name in the `products` table
    pub fn column(&self) -> &'static str {
        match self {
            ProductSort::Price => "price",
            ProductSort::Name => "name",
            ProductSort::CreatedAt => "created_at",
            ProductSort::Rating => "rating",
        }
    }
}

impl std::str::FromStr for ProductSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(ProductSort::Price),
            "name" => Ok(ProductSort::Name),
            "createdAt" | "created_at" | "newest" => Ok(ProductSort::CreatedAt),
            "rating" => Ok(ProductSort::Rating),
            _ => Err(format!("Invalid sort field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

/// Filter, sort and page selection for catalog listings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock: Option<bool>,
    /// Case-insensitive substring over name, description and brand
    pub search: Option<String>,
    pub sort: ProductSort,
    pub order: SortOrder,
    pub page: PageRequest,
}

impl ProductQuery {
    /// In-memory evaluation of the filter part of the query
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if self.in_stock == Some(true) && product.stock <= 0 {
            return false;
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = [&product.name, &product.description, &product.brand]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }

    /// In-memory ordering matching `sort` and `order`
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.sort {
            ProductSort::Price => a.price.cmp(&b.price),
            ProductSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ProductSort::CreatedAt => a.created_at.cmp(&b.created_at),
            ProductSort::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}
