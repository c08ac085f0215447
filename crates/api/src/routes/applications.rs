//! Route definitions for the seller-facing application lifecycle.
//!
//! Mounted at `/applications` by `api_routes()`.
//!
//! ```text
//! POST   /                  submit_application (anonymous or session-bound)
//! GET    /                  get_my_application
//! POST   /clarification     submit_clarification
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(applications::get_my_application).post(applications::submit_application),
        )
        .route("/clarification", post(applications::submit_clarification))
}
