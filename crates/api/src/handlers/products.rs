//! Handlers for the product catalog: CRUD, publishing, and bulk import.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use broadway_core::analytics::{EVENT_PRODUCT_DRAFTED, EVENT_PRODUCT_PUBLISHED};
use broadway_core::checklist::ChecklistKey;
use broadway_core::error::CoreError;
use broadway_core::types::DbId;
use broadway_core::validation::{require_min_len, require_non_empty, validate_price_within_mrp};
use broadway_db::models::product::{
    BulkCreateProducts, BulkProductError, BulkProductResult, CreateProduct, Product,
    UpdateProduct, STATUS_READY,
};
use broadway_db::repositories::{ChecklistRepo, ProductRepo};
use broadway_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/products
pub async fn list_products(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /api/v1/products
///
/// Create a draft product. Completes the `add_product` checklist item on
/// first use.
pub async fn create_product(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_product(&input)?;

    let product = ProductRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        product_id = product.id,
        sku = %product.sku,
        "Product drafted"
    );

    ChecklistRepo::complete_item(&state.pool, auth.user_id, ChecklistKey::AddProduct).await?;

    state.event_bus.publish(
        PlatformEvent::new(EVENT_PRODUCT_DRAFTED)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({
                "product_id": product.id,
                "sku": &product.sku,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// PATCH /api/v1/products/{id}
pub async fn update_product(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    let existing = find_owned(&state, product_id, auth.user_id).await?;

    // Price/MRP stay consistent whichever of the two the update touches.
    let price = input.price.unwrap_or(existing.price);
    let mrp = input.mrp.unwrap_or(existing.mrp);
    validate_price_within_mrp(price, mrp)?;

    if let Some(title) = input.title.as_deref() {
        require_min_len(title, 3, "Title")?;
    }
    if let Some(stock) = input.stock {
        if stock < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Stock must not be negative".into(),
            )));
        }
    }

    let updated = ProductRepo::update(&state.pool, product_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// PATCH /api/v1/products/{id}/publish
///
/// Move a draft product to `ready`.
pub async fn publish_product(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_owned(&state, product_id, auth.user_id).await?;

    let product = ProductRepo::set_status(&state.pool, product_id, STATUS_READY)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        product_id,
        sku = %product.sku,
        "Product published"
    );

    state.event_bus.publish(
        PlatformEvent::new(EVENT_PRODUCT_PUBLISHED)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({
                "product_id": product.id,
                "sku": &product.sku,
            })),
    );

    Ok(Json(DataResponse { data: product }))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_owned(&state, product_id, auth.user_id).await?;
    ProductRepo::delete(&state.pool, product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/products/bulk
///
/// Import a batch of products. Rows failing validation or duplicating an
/// existing SKU are reported individually; the rest are created.
pub async fn bulk_create_products(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<BulkCreateProducts>,
) -> AppResult<impl IntoResponse> {
    if input.products.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Products array is required".into(),
        )));
    }

    let mut created = Vec::new();
    let mut errors = Vec::new();

    for row in &input.products {
        if let Err(e) = validate_product(row) {
            errors.push(BulkProductError {
                sku: row.sku.clone(),
                error: e.to_string(),
            });
            continue;
        }

        if ProductRepo::sku_exists(&state.pool, auth.user_id, &row.sku).await? {
            errors.push(BulkProductError {
                sku: row.sku.clone(),
                error: "SKU already exists".to_string(),
            });
            continue;
        }

        let product = ProductRepo::create(&state.pool, auth.user_id, row).await?;
        created.push(product);
    }

    tracing::info!(
        user_id = auth.user_id,
        created = created.len(),
        failed = errors.len(),
        "Bulk product import finished"
    );

    if !created.is_empty() {
        ChecklistRepo::complete_item(&state.pool, auth.user_id, ChecklistKey::AddProduct).await?;
        state.event_bus.publish(
            PlatformEvent::new(EVENT_PRODUCT_DRAFTED)
                .with_actor(auth.user_id)
                .with_payload(serde_json::json!({ "count": created.len() })),
        );
    }

    Ok(Json(DataResponse {
        data: BulkProductResult { created, errors },
    }))
}

/// Fetch a product and verify ownership; absent and not-owned are
/// indistinguishable to the caller.
async fn find_owned(state: &AppState, product_id: DbId, user_id: DbId) -> AppResult<Product> {
    let product = ProductRepo::find_by_id(&state.pool, product_id).await?;
    match product {
        Some(product) if product.user_id == user_id => Ok(product),
        _ => Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        })),
    }
}

fn validate_product(input: &CreateProduct) -> Result<(), AppError> {
    require_min_len(&input.title, 3, "Title")?;
    require_non_empty(&input.category, "Category")?;
    require_non_empty(&input.brand, "Brand")?;
    require_non_empty(&input.sku, "SKU")?;
    validate_price_within_mrp(input.price, input.mrp)?;

    if let Some(tax_rate) = input.tax_rate {
        if !(0.0..=100.0).contains(&tax_rate) {
            return Err(AppError::Core(CoreError::Validation(
                "Tax rate must be between 0 and 100".into(),
            )));
        }
    }
    if let Some(stock) = input.stock {
        if stock < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Stock must not be negative".into(),
            )));
        }
    }
    if let Some(weight) = input.weight {
        if weight <= 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "Weight must be positive".into(),
            )));
        }
    }

    Ok(())
}
