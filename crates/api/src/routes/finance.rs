//! Route definitions for payout bank details and settlements.
//!
//! Mounted at `/finance` by `api_routes()`.
//!
//! ```text
//! GET    /bank              get_bank_details
//! POST   /bank              create_bank_details
//! GET    /settlements       list_settlements
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::finance;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/bank",
            get(finance::get_bank_details).post(finance::create_bank_details),
        )
        .route("/settlements", get(finance::list_settlements))
}
