pub mod addresses;
pub mod admin;
pub mod applications;
pub mod auth;
pub mod checklist;
pub mod finance;
pub mod health;
pub mod products;
pub mod settings;
pub mod support;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/request-link                   request sign-in link (public)
/// /auth/session                        exchange link token for JWT (public)
///
/// /applications                        submit (anonymous or authed), own detail
/// /applications/clarification          seller answers a clarification request
///
/// /admin/applications                  list all (admin only)
/// /admin/applications/{id}             detail, review action (admin only)
///
/// /products                            list, create
/// /products/bulk                       bulk import
/// /products/{id}                       update, delete
/// /products/{id}/publish               move draft to ready
///
/// /addresses                           list, create
/// /addresses/{id}                      update, delete
/// /addresses/{id}/default              make sole default of its type
///
/// /checklist                           get (lazily creates), manual item toggle
///
/// /finance/bank                        get, save bank details
/// /finance/settlements                 list settlements
///
/// /settings                            aggregated settings view
/// /settings/rto-shield                 replace RTO Shield flags
/// /settings/notifications              upsert notification preferences
/// /settings/api-key                    generate API key (plaintext shown once)
///
/// /support                             list, open tickets
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (magic-link sign-in).
        .nest("/auth", auth::router())
        // Seller application lifecycle.
        .nest("/applications", applications::router())
        // Admin review surface.
        .nest("/admin", admin::router())
        // Product catalog.
        .nest("/products", products::router())
        // Pickup/return addresses.
        .nest("/addresses", addresses::router())
        // Onboarding checklist.
        .nest("/checklist", checklist::router())
        // Payouts and settlements.
        .nest("/finance", finance::router())
        // Account settings.
        .nest("/settings", settings::router())
        // Support tickets.
        .nest("/support", support::router())
}
