//! HTTP-level integration tests for account settings, bank details, and
//! settlements.

mod common;

use axum::http::StatusCode;
use common::{
    application_payload, bearer_for, body_json, create_user, get_auth, patch_json_auth,
    post_json, post_json_auth,
};
use sqlx::PgPool;

use broadway_db::models::user::User;
use broadway_db::repositories::UserRepo;

/// Submit and approve an application, returning the approved seller.
async fn approved_seller(pool: &PgPool, email: &str) -> User {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/applications", application_payload(email)).await;
    let json = body_json(response).await;
    let application_id = json["data"]["application_id"].as_i64().unwrap();

    let admin = create_user(pool, "admin@broadway.local", "admin").await;
    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/admin/applications/{application_id}"),
        &bearer_for(&admin),
        serde_json::json!({"action": "approve"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    UserRepo::find_by_email(pool, email).await.unwrap().unwrap()
}

// ---------------------------------------------------------------------------
// Settings view
// ---------------------------------------------------------------------------

/// Settings are only available once the seller account exists.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_settings_404_before_approval(pool: PgPool) {
    let user = create_user(&pool, "seller@x.com", "seller").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/settings", &bearer_for(&user)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_settings_defaults_after_approval(pool: PgPool) {
    let seller = approved_seller(&pool, "a@x.com").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/settings", &bearer_for(&seller)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["rto_shield"]["enabled"], true);
    assert_eq!(json["data"]["rto_shield"]["address_validation"], true);
    assert_eq!(json["data"]["rto_shield"]["cod_otp"], true);
    assert_eq!(json["data"]["rto_shield"]["prepaid_nudge"], true);
    assert_eq!(json["data"]["notifications"]["email"], true);
    assert!(json["data"]["api_key_prefix"].is_null());
}

// ---------------------------------------------------------------------------
// RTO Shield
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rto_shield(pool: PgPool) {
    let seller = approved_seller(&pool, "a@x.com").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/settings/rto-shield",
        &bearer_for(&seller),
        serde_json::json!({
            "enabled": true,
            "address_validation": true,
            "cod_otp": false,
            "prepaid_nudge": false,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/settings", &bearer_for(&seller)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["rto_shield"]["cod_otp"], false);
    assert_eq!(json["data"]["rto_shield"]["address_validation"], true);
}

// ---------------------------------------------------------------------------
// Notification preferences
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_notification_preferences(pool: PgPool) {
    let seller = approved_seller(&pool, "a@x.com").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/settings/notifications",
        &bearer_for(&seller),
        serde_json::json!({
            "email": false,
            "order_updates": true,
            "payment_alerts": false,
            "product_alerts": true,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], false);
    assert_eq!(json["data"]["payment_alerts"], false);
    assert_eq!(json["data"]["order_updates"], true);
}

// ---------------------------------------------------------------------------
// API keys
// ---------------------------------------------------------------------------

/// The plaintext key appears exactly once (on creation); the settings view
/// only ever shows the prefix.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_api_key_plaintext_shown_once(pool: PgPool) {
    let seller = approved_seller(&pool, "a@x.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/settings/api-key",
        &bearer_for(&seller),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let plaintext = json["data"]["api_key"].as_str().unwrap();
    let prefix = json["data"]["key_prefix"].as_str().unwrap();
    assert!(plaintext.starts_with("bw_"));
    assert!(plaintext.starts_with(prefix));

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/settings", &bearer_for(&seller)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["api_key_prefix"], prefix);
    assert!(
        json["data"].get("api_key").is_none(),
        "settings must never return the plaintext key"
    );
}

// ---------------------------------------------------------------------------
// Bank details and settlements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bank_details_roundtrip(pool: PgPool) {
    let seller = approved_seller(&pool, "a@x.com").await;

    // Nothing saved yet.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/finance/bank", &bearer_for(&seller)).await;
    let json = body_json(response).await;
    assert!(json["data"].is_null());

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/finance/bank",
        &bearer_for(&seller),
        serde_json::json!({
            "account_holder": "Asha Fashion Pvt Ltd",
            "account_number": "1234567890",
            "ifsc": "HDFC0001234",
            "bank_name": "HDFC Bank",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["verified"], true);
    assert_eq!(json["data"]["details"]["ifsc"], "HDFC0001234");

    // The add_finance checklist item latched.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/checklist", &bearer_for(&seller)).await;
    let json = body_json(response).await;
    let item = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["key"] == "add_finance")
        .unwrap()
        .clone();
    assert_eq!(item["status"], "completed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_ifsc_is_rejected(pool: PgPool) {
    let seller = approved_seller(&pool, "a@x.com").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/finance/bank",
        &bearer_for(&seller),
        serde_json::json!({
            "account_holder": "Asha Fashion Pvt Ltd",
            "account_number": "1234567890",
            "ifsc": "HDFC1234",
            "bank_name": "HDFC Bank",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_settlements_empty_list(pool: PgPool) {
    let seller = approved_seller(&pool, "a@x.com").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/finance/settlements", &bearer_for(&seller)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
