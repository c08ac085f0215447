//! Shared test harness: router construction and request helpers.
//!
//! Mirrors the router construction in `main.rs` via `build_app_router` so
//! integration tests exercise the same middleware stack (CORS, request ID,
//! timeout, tracing, panic recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use broadway_api::auth::jwt::{generate_access_token, JwtConfig};
use broadway_api::config::ServerConfig;
use broadway_api::router::build_app_router;
use broadway_api::state::AppState;
use broadway_db::models::user::{CreateUser, User};
use broadway_db::repositories::UserRepo;
use broadway_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_base_url: "http://localhost:3000".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
            login_token_expiry_mins: 10,
        },
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_bus(pool).0
}

/// Build the router and also return its event bus, for tests that assert on
/// published events (e.g. reading the magic-link email).
pub fn build_test_app_with_bus(pool: PgPool) -> (Router, Arc<EventBus>) {
    let config = test_config();
    let event_bus = Arc::new(EventBus::default());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::clone(&event_bus),
    };

    (build_app_router(state, &config), event_bus)
}

/// Create a user directly in the database.
pub async fn create_user(pool: &PgPool, email: &str, role: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            name: email.split('@').next().unwrap().to_string(),
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Bearer token for a user, signed with the test secret.
pub fn bearer_for(user: &User) -> String {
    let token = generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed");
    format!("Bearer {token}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request_auth(
    method: Method,
    uri: &str,
    bearer: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", bearer)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, bearer: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", bearer)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    bearer: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request_auth(Method::POST, uri, bearer, body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    bearer: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request_auth(Method::PATCH, uri, bearer, body)).await
}

pub async fn patch_auth(app: Router, uri: &str, bearer: &str) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header("authorization", bearer)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, bearer: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("authorization", bearer)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

/// A minimal valid application submission payload.
pub fn application_payload(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "full_name": "Asha Rao",
        "phone": "+919876543210",
        "brand_name": "Asha Fashion",
        "category": "Fashion",
        "availability_stage": "1-3 years",
        "gst_available": false,
    })
}
