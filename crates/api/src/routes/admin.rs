//! Route definitions for admin application review.
//!
//! Mounted at `/admin` by `api_routes()`. All handlers require the admin
//! role via `RequireAdmin`.
//!
//! ```text
//! GET    /applications           list_applications
//! GET    /applications/{id}      get_application
//! PATCH  /applications/{id}      review_application
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::admin_applications;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/applications", get(admin_applications::list_applications))
        .route(
            "/applications/{id}",
            get(admin_applications::get_application)
                .patch(admin_applications::review_application),
        )
}
