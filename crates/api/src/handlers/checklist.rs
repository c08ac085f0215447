//! Handlers for the onboarding checklist.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use broadway_core::checklist::{ChecklistKey, ItemStatus};
use broadway_core::error::CoreError;
use broadway_db::models::checklist::UpdateChecklistItem;
use broadway_db::repositories::ChecklistRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/checklist
///
/// The caller's checklist, lazily created with all six items pending.
pub async fn get_checklist(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let checklist = ChecklistRepo::get_or_create(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: checklist }))
}

/// PATCH /api/v1/checklist
///
/// Manually toggle an item (`configure_rto` and `review_fees` have no
/// automatic trigger). Unknown keys are reported as not found.
pub async fn update_checklist_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateChecklistItem>,
) -> AppResult<impl IntoResponse> {
    let key: ChecklistKey = input
        .key
        .parse()
        .map_err(|_: CoreError| AppError::Core(CoreError::NotFound {
            entity: "ChecklistItem",
            id: 0,
        }))?;

    let status = match input.status.as_str() {
        "pending" => ItemStatus::Pending,
        "completed" => ItemStatus::Completed,
        other => {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown item status '{other}'"
            ))))
        }
    };

    let checklist = ChecklistRepo::set_item_status(&state.pool, auth.user_id, key, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OnboardingChecklist",
            id: auth.user_id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        key = key.as_str(),
        status = %input.status,
        "Checklist item updated"
    );

    Ok(Json(DataResponse { data: checklist }))
}
