//! Handlers for pickup/return address management.
//!
//! All routes are ownership-scoped: an address that exists but belongs to
//! another user is reported as not found, never as forbidden.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use broadway_core::analytics::EVENT_ADDRESS_ADDED;
use broadway_core::checklist::ChecklistKey;
use broadway_core::error::CoreError;
use broadway_core::types::DbId;
use broadway_core::validation::{validate_phone, validate_pincode};
use broadway_db::models::address::{Address, CreateAddress, UpdateAddress, TYPE_PICKUP, TYPE_RETURN};
use broadway_db::repositories::{AddressRepo, ChecklistRepo};
use broadway_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/addresses
pub async fn list_addresses(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let addresses = AddressRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: addresses }))
}

/// POST /api/v1/addresses
///
/// Create an address. A default flag clears any other default of the same
/// (user, type) pair in the same transaction. Completes the `add_address`
/// checklist item on first use.
pub async fn create_address(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAddress>,
) -> AppResult<impl IntoResponse> {
    validate_address_type(&input.address_type)?;
    validate_pincode(&input.pincode)?;
    validate_phone(&input.phone)?;

    let address = AddressRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        address_id = address.id,
        address_type = %address.address_type,
        is_default = address.is_default,
        "Address created"
    );

    ChecklistRepo::complete_item(&state.pool, auth.user_id, ChecklistKey::AddAddress).await?;

    state.event_bus.publish(
        PlatformEvent::new(EVENT_ADDRESS_ADDED)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({
                "type": &address.address_type,
                "is_default": address.is_default,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: address })))
}

/// PATCH /api/v1/addresses/{id}
pub async fn update_address(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(address_id): Path<DbId>,
    Json(input): Json<UpdateAddress>,
) -> AppResult<impl IntoResponse> {
    let existing = find_owned(&state, address_id, auth.user_id).await?;

    if let Some(address_type) = input.address_type.as_deref() {
        validate_address_type(address_type)?;
    }
    if let Some(pincode) = input.pincode.as_deref() {
        validate_pincode(pincode)?;
    }
    if let Some(phone) = input.phone.as_deref() {
        validate_phone(phone)?;
    }

    // The default-clearing scope follows the address's new type when the
    // update changes it.
    let target_type = input
        .address_type
        .clone()
        .unwrap_or(existing.address_type);

    let updated = AddressRepo::update(&state.pool, address_id, auth.user_id, &target_type, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Address",
            id: address_id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// PATCH /api/v1/addresses/{id}/default
///
/// Make this address the sole default of its (user, type) pair.
pub async fn set_default_address(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(address_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = find_owned(&state, address_id, auth.user_id).await?;

    let updated = AddressRepo::set_default(
        &state.pool,
        address_id,
        auth.user_id,
        &existing.address_type,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Address",
        id: address_id,
    }))?;

    tracing::info!(
        user_id = auth.user_id,
        address_id,
        address_type = %updated.address_type,
        "Default address set"
    );

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/addresses/{id}
pub async fn delete_address(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(address_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_owned(&state, address_id, auth.user_id).await?;
    AddressRepo::delete(&state.pool, address_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fetch an address and verify ownership; absent and not-owned are
/// indistinguishable to the caller.
async fn find_owned(state: &AppState, address_id: DbId, user_id: DbId) -> AppResult<Address> {
    let address = AddressRepo::find_by_id(&state.pool, address_id).await?;
    match address {
        Some(address) if address.user_id == user_id => Ok(address),
        _ => Err(AppError::Core(CoreError::NotFound {
            entity: "Address",
            id: address_id,
        })),
    }
}

fn validate_address_type(address_type: &str) -> Result<(), AppError> {
    if address_type == TYPE_PICKUP || address_type == TYPE_RETURN {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Address type must be '{TYPE_PICKUP}' or '{TYPE_RETURN}'"
        ))))
    }
}
