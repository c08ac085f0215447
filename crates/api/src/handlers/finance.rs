//! Handlers for payout bank details and settlements.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use broadway_core::analytics::EVENT_FINANCE_ADDED;
use broadway_core::checklist::ChecklistKey;
use broadway_core::validation::{
    require_min_len, validate_account_number, validate_ifsc,
};
use broadway_db::models::payout::BankDetails;
use broadway_db::repositories::{ChecklistRepo, PayoutRepo, SettlementRepo};
use broadway_events::PlatformEvent;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/finance/bank
///
/// The caller's bank detail, or `null` when none has been saved.
pub async fn get_bank_details(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bank = PayoutRepo::find_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: bank }))
}

/// POST /api/v1/finance/bank
///
/// Save bank details. Verification is mocked (always verified). Completes
/// the `add_finance` checklist item on first use.
pub async fn create_bank_details(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<BankDetails>,
) -> AppResult<impl IntoResponse> {
    require_min_len(&input.account_holder, 2, "Account holder name")?;
    validate_account_number(&input.account_number)?;
    validate_ifsc(&input.ifsc)?;
    require_min_len(&input.bank_name, 2, "Bank name")?;

    let bank = PayoutRepo::create_bank(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        payout_method_id = bank.id,
        "Bank details saved"
    );

    ChecklistRepo::complete_item(&state.pool, auth.user_id, ChecklistKey::AddFinance).await?;

    state.event_bus.publish(
        PlatformEvent::new(EVENT_FINANCE_ADDED)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({ "method": "bank" })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: bank })))
}

/// GET /api/v1/finance/settlements
///
/// The caller's settlements, most recent period first.
pub async fn list_settlements(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let settlements = SettlementRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: settlements }))
}
