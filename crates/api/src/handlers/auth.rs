//! Passwordless authentication handlers.
//!
//! Sign-in is a magic-link flow: the seller requests a link by email, and
//! exchanging the emailed token yields a JWT access token. The request-link
//! endpoint always answers 202 so it cannot be used to probe which emails
//! have accounts.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use broadway_core::error::CoreError;
use broadway_db::models::user::User;
use broadway_db::repositories::{LoginTokenRepo, UserRepo};
use broadway_events::PlatformEvent;

use crate::auth::jwt::{generate_access_token, generate_login_token, hash_login_token};
use crate::error::{AppError, AppResult};
use crate::notifications::EVENT_MAGIC_LINK_REQUESTED;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the magic-link request endpoint.
#[derive(Debug, Deserialize)]
pub struct RequestLink {
    pub email: String,
}

/// Request body for the token-exchange endpoint.
#[derive(Debug, Deserialize)]
pub struct CreateSession {
    pub token: String,
}

/// Successful sign-in response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    /// Seconds until the access token expires.
    pub expires_in: i64,
    pub user: User,
}

/// POST /api/v1/auth/request-link
///
/// Issue a single-use sign-in token for a known user and email it. Always
/// answers 202, whether or not the email matched an account.
pub async fn request_link(
    State(state): State<AppState>,
    Json(input): Json<RequestLink>,
) -> AppResult<impl IntoResponse> {
    let email = input.email.trim().to_lowercase();

    if let Some(user) = UserRepo::find_by_email(&state.pool, &email).await? {
        let (plaintext, hash) = generate_login_token();
        let expires_at = chrono::Utc::now()
            + chrono::Duration::minutes(state.config.jwt.login_token_expiry_mins);
        LoginTokenRepo::create(&state.pool, &email, &hash, expires_at).await?;

        let link = format!(
            "{}/auth/sign-in?token={plaintext}",
            state.config.public_base_url
        );
        state.event_bus.publish(
            PlatformEvent::new(EVENT_MAGIC_LINK_REQUESTED)
                .with_actor(user.id)
                .with_recipient(&user.email)
                .with_payload(serde_json::json!({ "link": link }))
                .without_analytics(),
        );

        tracing::info!(user_id = user.id, "Sign-in link issued");
    } else {
        tracing::debug!("Sign-in link requested for unknown email");
    }

    Ok(StatusCode::ACCEPTED)
}

/// POST /api/v1/auth/session
///
/// Exchange a valid magic-link token for an access token. Tokens are
/// single-use and expire after a few minutes.
pub async fn create_session(
    State(state): State<AppState>,
    Json(input): Json<CreateSession>,
) -> AppResult<impl IntoResponse> {
    let token = LoginTokenRepo::consume(&state.pool, &hash_login_token(input.token.trim()))
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired sign-in token".into(),
            ))
        })?;

    let user = UserRepo::find_by_email(&state.pool, &token.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired sign-in token".into(),
            ))
        })?;

    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Failed to sign access token: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "Session created");

    Ok(Json(DataResponse {
        data: SessionResponse {
            access_token,
            expires_in: state.config.jwt.access_token_expiry_mins * 60,
            user,
        },
    }))
}
