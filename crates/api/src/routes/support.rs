//! Route definitions for support tickets.
//!
//! Mounted at `/support` by `api_routes()`.
//!
//! ```text
//! GET    /                  list_tickets
//! POST   /                  create_ticket
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::support;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(support::list_tickets).post(support::create_ticket))
}
