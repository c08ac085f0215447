//! Route definitions for passwordless authentication.
//!
//! Mounted at `/auth` by `api_routes()`.
//!
//! ```text
//! POST   /request-link      request_link (public)
//! POST   /session           create_session (public)
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/request-link", post(auth::request_link))
        .route("/session", post(auth::create_session))
}
