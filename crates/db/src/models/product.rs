//! Product catalog entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// Product status values.
pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_READY: &str = "ready";

/// Physical dimensions in centimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub brand: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub hsn: Option<String>,
    pub price: f64,
    pub mrp: f64,
    pub tax_rate: f64,
    pub stock: i32,
    pub weight: Option<f64>,
    pub dimensions: Option<Json<Dimensions>>,
    pub origin_country: String,
    pub images: Option<Json<Vec<String>>>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a product (single and bulk paths).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub brand: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub hsn: Option<String>,
    pub price: f64,
    pub mrp: f64,
    pub tax_rate: Option<f64>,
    pub stock: Option<i32>,
    pub weight: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub origin_country: Option<String>,
    pub images: Option<Vec<String>>,
}

/// DTO for partially updating a product. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    pub hsn: Option<String>,
    pub price: Option<f64>,
    pub mrp: Option<f64>,
    pub tax_rate: Option<f64>,
    pub stock: Option<i32>,
    pub weight: Option<f64>,
    pub origin_country: Option<String>,
}

/// Request body for bulk product import.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkCreateProducts {
    pub products: Vec<CreateProduct>,
}

/// Per-row failure in a bulk import.
#[derive(Debug, Clone, Serialize)]
pub struct BulkProductError {
    pub sku: String,
    pub error: String,
}

/// Result of a bulk import: created rows plus per-row failures.
#[derive(Debug, Serialize)]
pub struct BulkProductResult {
    pub created: Vec<Product>,
    pub errors: Vec<BulkProductError>,
}
