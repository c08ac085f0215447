//! Route definitions for the product catalog.
//!
//! Mounted at `/products` by `api_routes()`.
//!
//! ```text
//! GET    /                  list_products
//! POST   /                  create_product
//! POST   /bulk              bulk_create_products
//! PATCH  /{id}              update_product
//! DELETE /{id}              delete_product
//! PATCH  /{id}/publish      publish_product
//! ```

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route("/bulk", post(products::bulk_create_products))
        .route(
            "/{id}",
            patch(products::update_product).delete(products::delete_product),
        )
        .route("/{id}/publish", patch(products::publish_product))
}
