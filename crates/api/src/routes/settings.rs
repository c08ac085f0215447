//! Route definitions for account settings.
//!
//! Mounted at `/settings` by `api_routes()`.
//!
//! ```text
//! GET    /                  get_settings
//! PATCH  /rto-shield        update_rto_shield
//! PATCH  /notifications     update_notifications
//! POST   /api-key           create_api_key
//! ```

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::get_settings))
        .route("/rto-shield", patch(settings::update_rto_shield))
        .route("/notifications", patch(settings::update_notifications))
        .route("/api-key", post(settings::create_api_key))
}
