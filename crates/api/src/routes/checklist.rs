//! Route definitions for the onboarding checklist.
//!
//! Mounted at `/checklist` by `api_routes()`.
//!
//! ```text
//! GET    /                  get_checklist (lazily creates)
//! PATCH  /                  update_checklist_item
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::checklist;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(checklist::get_checklist).patch(checklist::update_checklist_item),
    )
}
