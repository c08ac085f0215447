//! HTTP-level integration tests for the onboarding checklist.

mod common;

use axum::http::StatusCode;
use common::{bearer_for, body_json, create_user, get_auth, patch_json_auth, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Lazy creation
// ---------------------------------------------------------------------------

/// A first read materializes the six fixed items, all pending, in order.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_first_read_creates_checklist(pool: PgPool) {
    let user = create_user(&pool, "seller@x.com", "seller").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/checklist", &bearer_for(&user)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"]["items"].as_array().unwrap();
    let keys: Vec<&str> = items.iter().map(|i| i["key"].as_str().unwrap()).collect();
    assert_eq!(
        keys,
        vec![
            "add_product",
            "add_finance",
            "add_address",
            "configure_rto",
            "review_fees",
            "invite_team"
        ]
    );
    assert!(items.iter().all(|i| i["status"] == "pending"));
}

// ---------------------------------------------------------------------------
// Manual toggles
// ---------------------------------------------------------------------------

/// `configure_rto` has no automatic trigger; it is marked via PATCH.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_manual_toggle(pool: PgPool) {
    let user = create_user(&pool, "seller@x.com", "seller").await;

    let app = common::build_test_app(pool.clone());
    get_auth(app, "/api/v1/checklist", &bearer_for(&user)).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/checklist",
        &bearer_for(&user),
        serde_json::json!({"key": "configure_rto", "status": "completed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let item = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["key"] == "configure_rto")
        .unwrap()
        .clone();
    assert_eq!(item["status"], "completed");
    assert!(!item["completed_at"].is_null());

    // Toggling back to pending clears the timestamp.
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/api/v1/checklist",
        &bearer_for(&user),
        serde_json::json!({"key": "configure_rto", "status": "pending"}),
    )
    .await;
    let json = body_json(response).await;
    let item = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["key"] == "configure_rto")
        .unwrap()
        .clone();
    assert_eq!(item["status"], "pending");
    assert!(item["completed_at"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_item_returns_404(pool: PgPool) {
    let user = create_user(&pool, "seller@x.com", "seller").await;

    let app = common::build_test_app(pool.clone());
    get_auth(app, "/api/v1/checklist", &bearer_for(&user)).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/api/v1/checklist",
        &bearer_for(&user),
        serde_json::json!({"key": "ship_order", "status": "completed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Latch idempotence
// ---------------------------------------------------------------------------

/// A second address creation does not disturb the already-completed
/// `add_address` item: the original completion timestamp survives.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_latch_is_idempotent(pool: PgPool) {
    let user = create_user(&pool, "seller@x.com", "seller").await;

    let app = common::build_test_app(pool.clone());
    get_auth(app, "/api/v1/checklist", &bearer_for(&user)).await;

    let address = serde_json::json!({
        "type": "pickup",
        "name": "Warehouse",
        "phone": "9876543210",
        "line1": "123 Fashion Street",
        "city": "Mumbai",
        "state": "Maharashtra",
        "pincode": "400050",
    });

    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/v1/addresses", &bearer_for(&user), address.clone()).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/checklist", &bearer_for(&user)).await;
    let first = body_json(response).await;
    let first_completed_at = first["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["key"] == "add_address")
        .unwrap()["completed_at"]
        .clone();
    assert!(!first_completed_at.is_null());

    // Second trigger: a no-op, timestamp untouched.
    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/v1/addresses", &bearer_for(&user), address).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/checklist", &bearer_for(&user)).await;
    let second = body_json(response).await;
    let second_completed_at = second["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["key"] == "add_address")
        .unwrap()["completed_at"]
        .clone();

    assert_eq!(first_completed_at, second_completed_at);
}
