//! Admin handlers for reviewing seller applications.
//!
//! The review endpoint is deliberately permissive about the source status:
//! any action is accepted whatever the current state, the transition simply
//! appends to the audit trail. Acting on an application that is already in a
//! terminal state is logged as irregular. Approval provisioning is
//! idempotent at the storage layer, so a duplicate approve can never create
//! a second seller account or checklist.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use broadway_core::analytics::{
    EVENT_APPLICATION_APPROVED, EVENT_APPLICATION_REJECTED, EVENT_APPLICATION_STATUS_CHANGED,
    EVENT_CLARIFICATION_REQUESTED,
};
use broadway_core::application::{ApplicationStatus, ReviewAction, TimelineEvent};
use broadway_core::error::CoreError;
use broadway_core::types::DbId;
use broadway_db::models::application::{AdminApplicationDetail, ReviewRequest};
use broadway_db::repositories::{ApplicationRepo, MessageRepo, SellerProfileRepo, UserRepo};
use broadway_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/applications
///
/// Every application with profile summary and applicant email, newest first.
pub async fn list_applications(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let applications = ApplicationRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: applications }))
}

/// GET /api/v1/admin/applications/{id}
///
/// Full application detail: profile, applicant, and message thread.
pub async fn get_application(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(application_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let application = ApplicationRepo::find_by_id(&state.pool, application_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SellerApplication",
            id: application_id,
        }))?;

    let profile = SellerProfileRepo::find_by_id(&state.pool, application.profile_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SellerProfile",
            id: application.profile_id,
        }))?;

    let user = UserRepo::find_by_id(&state.pool, application.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: application.user_id,
        }))?;

    let messages = MessageRepo::list_for_application(&state.pool, application.id).await?;

    Ok(Json(DataResponse {
        data: AdminApplicationDetail {
            application,
            profile,
            user,
            messages,
        },
    }))
}

/// PATCH /api/v1/admin/applications/{id}
///
/// Apply a review action: `review`, `approve`, `reject`, or `clarify`.
/// Reject and clarify require a non-empty message; the message is appended
/// to the application's thread. Approval provisions the seller account and
/// onboarding checklist exactly once.
pub async fn review_application(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(application_id): Path<DbId>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<impl IntoResponse> {
    let action: ReviewAction = input.action.parse()?;

    let message = input
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());
    if action.requires_message() && message.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "A message is required for the '{}' action",
            input.action
        ))));
    }

    let existing = ApplicationRepo::find_by_id(&state.pool, application_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SellerApplication",
            id: application_id,
        }))?;

    let current: ApplicationStatus = existing.status.parse()?;
    if current.is_terminal() {
        tracing::warn!(
            application_id,
            current_status = %current,
            action = %input.action,
            "Irregular transition: reviewing an application already in a terminal status"
        );
    }

    let target = action.target_status();
    let event = TimelineEvent::new(
        target,
        chrono::Utc::now(),
        action.timeline_message(message),
    );

    // The review action never writes to the thread; the others append the
    // admin's message when one was supplied.
    let thread_message = match action {
        ReviewAction::Review => None,
        _ => message,
    };

    let outcome = ApplicationRepo::apply_review(
        &state.pool,
        application_id,
        admin.user_id,
        target.as_str(),
        &event,
        thread_message,
        action == ReviewAction::Approve,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "SellerApplication",
        id: application_id,
    }))?;

    if action == ReviewAction::Approve && !outcome.account_created {
        tracing::warn!(
            application_id,
            user_id = outcome.application.user_id,
            "Duplicate approval: seller account already provisioned, skipped"
        );
    }

    tracing::info!(
        application_id,
        reviewer_id = admin.user_id,
        action = %input.action,
        status = %target,
        "Application reviewed"
    );

    let applicant = UserRepo::find_by_id(&state.pool, outcome.application.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: outcome.application.user_id,
        }))?;

    // Post-commit side effects. Rejection intentionally records no analytics
    // event; the seller is still notified by email.
    let platform_event = match action {
        ReviewAction::Approve => PlatformEvent::new(EVENT_APPLICATION_APPROVED)
            .with_payload(serde_json::json!({ "application_id": application_id })),
        ReviewAction::Clarify => PlatformEvent::new(EVENT_CLARIFICATION_REQUESTED)
            .with_payload(serde_json::json!({
                "application_id": application_id,
                "message": message,
            })),
        ReviewAction::Review => PlatformEvent::new(EVENT_APPLICATION_STATUS_CHANGED)
            .with_payload(serde_json::json!({
                "application_id": application_id,
                "status": target.as_str(),
            })),
        ReviewAction::Reject => PlatformEvent::new(EVENT_APPLICATION_REJECTED)
            .with_payload(serde_json::json!({
                "application_id": application_id,
                "reason": message,
            }))
            .without_analytics(),
    };
    state.event_bus.publish(
        platform_event
            .with_actor(applicant.id)
            .with_recipient(&applicant.email),
    );

    Ok(Json(DataResponse {
        data: outcome.application,
    }))
}
