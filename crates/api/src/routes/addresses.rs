//! Route definitions for address management.
//!
//! Mounted at `/addresses` by `api_routes()`.
//!
//! ```text
//! GET    /                  list_addresses
//! POST   /                  create_address
//! PATCH  /{id}              update_address
//! DELETE /{id}              delete_address
//! PATCH  /{id}/default      set_default_address
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::addresses;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(addresses::list_addresses).post(addresses::create_address),
        )
        .route(
            "/{id}",
            patch(addresses::update_address).delete(addresses::delete_address),
        )
        .route("/{id}/default", patch(addresses::set_default_address))
}
