//! Handlers for seller account settings: RTO Shield flags, notification
//! preferences, and API keys.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use broadway_core::api_keys::generate_api_key;
use broadway_core::error::CoreError;
use broadway_core::features::{RtoShieldSettings, SellerFeatures};
use broadway_db::models::api_key::ApiKeyCreatedResponse;
use broadway_db::models::notification_preference::UpdateNotificationPreferences;
use broadway_db::repositories::{ApiKeyRepo, NotificationPreferenceRepo, SellerAccountRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Aggregated settings view: feature flags, notification preferences, and
/// the current API key's display prefix.
#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub rto_shield: RtoShieldSettings,
    pub notifications: NotificationFlags,
    pub api_key_prefix: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotificationFlags {
    pub email: bool,
    pub order_updates: bool,
    pub payment_alerts: bool,
    pub product_alerts: bool,
}

/// GET /api/v1/settings
///
/// Requires an approved seller (404 until the seller account exists).
pub async fn get_settings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let account = SellerAccountRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SellerAccount",
            id: auth.user_id,
        }))?;

    let prefs = NotificationPreferenceRepo::get_or_create(&state.pool, auth.user_id).await?;
    let api_key = ApiKeyRepo::find_latest_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse {
        data: SettingsView {
            rto_shield: account.features.0.rto_shield,
            notifications: NotificationFlags {
                email: prefs.email,
                order_updates: prefs.order_updates,
                payment_alerts: prefs.payment_alerts,
                product_alerts: prefs.product_alerts,
            },
            api_key_prefix: api_key.map(|k| k.key_prefix),
        },
    }))
}

/// PATCH /api/v1/settings/rto-shield
///
/// Replace the RTO Shield flag block on the seller account.
pub async fn update_rto_shield(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<RtoShieldSettings>,
) -> AppResult<impl IntoResponse> {
    let account = SellerAccountRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SellerAccount",
            id: auth.user_id,
        }))?;

    let features = SellerFeatures { rto_shield: input };
    let updated = SellerAccountRepo::update_features(&state.pool, auth.user_id, &features)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SellerAccount",
            id: account.id,
        }))?;

    tracing::info!(user_id = auth.user_id, "RTO Shield settings updated");

    Ok(Json(DataResponse {
        data: updated.features.0.rto_shield,
    }))
}

/// PATCH /api/v1/settings/notifications
///
/// Upsert the caller's notification preferences.
pub async fn update_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateNotificationPreferences>,
) -> AppResult<impl IntoResponse> {
    let prefs = NotificationPreferenceRepo::upsert(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, "Notification preferences updated");

    Ok(Json(DataResponse { data: prefs }))
}

/// POST /api/v1/settings/api-key
///
/// Generate a new API key. The plaintext is returned exactly once; only the
/// hash and display prefix are stored. A new key supersedes older ones.
pub async fn create_api_key(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let generated = generate_api_key();

    let key = ApiKeyRepo::create(&state.pool, auth.user_id, &generated.hash, &generated.prefix)
        .await?;

    tracing::info!(
        user_id = auth.user_id,
        api_key_id = key.id,
        key_prefix = %generated.prefix,
        "API key created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ApiKeyCreatedResponse {
                id: key.id,
                key_prefix: generated.prefix,
                api_key: generated.plaintext,
                created_at: key.created_at,
            },
        }),
    ))
}
