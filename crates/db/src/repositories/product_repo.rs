//! Repository for the `products` table.

use sqlx::types::Json;
use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct, STATUS_DRAFT};

/// Column list for products queries.
const COLUMNS: &str = "id, user_id, title, description, category, brand, sku, barcode, hsn, \
    price, mrp, tax_rate, stock, weight, dimensions, origin_country, images, status, \
    created_at, updated_at";

/// Default GST rate applied when the seller does not specify one.
const DEFAULT_TAX_RATE: f64 = 18.0;

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List a user's products, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the user already has a product with this SKU.
    pub async fn sku_exists(pool: &PgPool, user_id: DbId, sku: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM products WHERE user_id = $1 AND sku = $2)",
        )
        .bind(user_id)
        .bind(sku)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Insert a new draft product.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (user_id, title, description, category, brand, sku, barcode, hsn,
                 price, mrp, tax_rate, stock, weight, dimensions, origin_country,
                 images, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                 $15, $16, $17)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.brand)
            .bind(&input.sku)
            .bind(&input.barcode)
            .bind(&input.hsn)
            .bind(input.price)
            .bind(input.mrp)
            .bind(input.tax_rate.unwrap_or(DEFAULT_TAX_RATE))
            .bind(input.stock.unwrap_or(0))
            .bind(input.weight)
            .bind(input.dimensions.as_ref().map(Json))
            .bind(input.origin_country.as_deref().unwrap_or("India"))
            .bind(input.images.as_ref().map(Json))
            .bind(STATUS_DRAFT)
            .fetch_one(pool)
            .await
    }

    /// Partially update a product.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                brand = COALESCE($5, brand),
                sku = COALESCE($6, sku),
                barcode = COALESCE($7, barcode),
                hsn = COALESCE($8, hsn),
                price = COALESCE($9, price),
                mrp = COALESCE($10, mrp),
                tax_rate = COALESCE($11, tax_rate),
                stock = COALESCE($12, stock),
                weight = COALESCE($13, weight),
                origin_country = COALESCE($14, origin_country)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.brand)
            .bind(&input.sku)
            .bind(&input.barcode)
            .bind(&input.hsn)
            .bind(input.price)
            .bind(input.mrp)
            .bind(input.tax_rate)
            .bind(input.stock)
            .bind(input.weight)
            .bind(&input.origin_country)
            .fetch_optional(pool)
            .await
    }

    /// Set a product's status (draft/ready).
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
