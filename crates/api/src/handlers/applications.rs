//! Seller-facing application lifecycle handlers: submission, status view,
//! and clarification replies.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use broadway_core::analytics::{EVENT_APPLICATION_STATUS_CHANGED, EVENT_APPLICATION_SUBMITTED};
use broadway_core::application::{
    ApplicationStatus, Timeline, TimelineEvent, TIMELINE_CLARIFICATION_SUBMITTED,
};
use broadway_core::error::CoreError;
use broadway_core::profile::{
    validate_availability_stage, validate_category, MAX_ADDITIONAL_INFO_LEN,
};
use broadway_core::roles::ROLE_SELLER;
use broadway_core::types::DbId;
use broadway_core::validation::{
    require_min_len, validate_contact_phone, validate_email, validate_gstin, validate_pan,
    validate_pincode,
};
use broadway_db::models::application::{
    ApplicationDetail, ClarificationRequest, SubmitApplication,
};
use broadway_db::models::seller_profile::CreateSellerProfile;
use broadway_db::models::user::CreateUser;
use broadway_db::repositories::{
    ApplicationRepo, MessageRepo, SellerProfileRepo, UserRepo,
};
use broadway_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmittedApplication {
    pub application_id: DbId,
}

/// POST /api/v1/applications
///
/// Submit a seller application. Accepts anonymous callers: the user is
/// resolved from the session when one is present, otherwise looked up (or
/// created) by the submitted email. One application per user.
pub async fn submit_application(
    MaybeAuthUser(auth): MaybeAuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitApplication>,
) -> AppResult<impl IntoResponse> {
    validate_submission(&input)?;

    let user = match &auth {
        Some(session) => UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Unknown session user".into()))
            })?,
        None => match UserRepo::find_by_email(&state.pool, &input.email).await? {
            Some(user) => user,
            None => {
                UserRepo::create(
                    &state.pool,
                    &CreateUser {
                        email: input.email.clone(),
                        name: input.profile.full_name.clone(),
                        role: ROLE_SELLER.to_string(),
                    },
                )
                .await?
            }
        },
    };

    if ApplicationRepo::find_by_user_id(&state.pool, user.id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "An application already exists for this user".into(),
        )));
    }

    let timeline = Timeline::submitted(chrono::Utc::now());
    let (application, _profile) =
        ApplicationRepo::create_with_profile(&state.pool, user.id, &input.profile, &timeline)
            .await?;

    tracing::info!(
        application_id = application.id,
        user_id = user.id,
        "Seller application submitted"
    );

    // Post-commit side effects: analytics + confirmation email.
    state.event_bus.publish(
        PlatformEvent::new(EVENT_APPLICATION_SUBMITTED)
            .with_actor(user.id)
            .with_recipient(&user.email)
            .with_payload(serde_json::json!({ "application_id": application.id })),
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmittedApplication {
                application_id: application.id,
            },
        }),
    ))
}

/// GET /api/v1/applications
///
/// The caller's own application with profile and message thread.
pub async fn get_my_application(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let application = ApplicationRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SellerApplication",
            id: auth.user_id,
        }))?;

    let profile = SellerProfileRepo::find_by_id(&state.pool, application.profile_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SellerProfile",
            id: application.profile_id,
        }))?;

    let messages = MessageRepo::list_for_application(&state.pool, application.id).await?;

    Ok(Json(DataResponse {
        data: ApplicationDetail {
            application,
            profile,
            messages,
        },
    }))
}

/// POST /api/v1/applications/clarification
///
/// Seller answers an outstanding clarification request. Only valid while the
/// application is in `needs_clarification`.
pub async fn submit_clarification(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ClarificationRequest>,
) -> AppResult<impl IntoResponse> {
    if input.message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Clarification message is required".into(),
        )));
    }

    let application = ApplicationRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SellerApplication",
            id: auth.user_id,
        }))?;

    let status: ApplicationStatus = application.status.parse()?;
    if status != ApplicationStatus::NeedsClarification {
        return Err(AppError::Core(CoreError::Validation(
            "No clarification was requested for this application".into(),
        )));
    }

    let event = TimelineEvent::new(
        ApplicationStatus::ClarificationSubmitted,
        chrono::Utc::now(),
        TIMELINE_CLARIFICATION_SUBMITTED,
    );
    let updated = ApplicationRepo::submit_clarification(
        &state.pool,
        application.id,
        auth.user_id,
        &event,
        input.message.trim(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "SellerApplication",
        id: application.id,
    }))?;

    tracing::info!(
        application_id = updated.id,
        user_id = auth.user_id,
        "Clarification submitted"
    );

    state.event_bus.publish(
        PlatformEvent::new(EVENT_APPLICATION_STATUS_CHANGED)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({
                "application_id": updated.id,
                "status": &updated.status,
            })),
    );

    Ok(Json(DataResponse { data: updated }))
}

/// Validate the submission payload before touching the database.
fn validate_submission(input: &SubmitApplication) -> Result<(), AppError> {
    validate_email(&input.email)?;

    let profile = &input.profile;
    require_min_len(&profile.full_name, 2, "Full name")?;
    validate_contact_phone(&profile.phone)?;
    require_min_len(&profile.brand_name, 2, "Brand name")?;
    validate_category(&profile.category)?;
    validate_availability_stage(&profile.availability_stage)?;

    if let Some(gstin) = profile.gstin.as_deref() {
        validate_gstin(gstin)?;
    }
    if let Some(pan) = profile.pan.as_deref() {
        validate_pan(pan)?;
    }
    if let Some(pincode) = profile.pincode.as_deref() {
        validate_pincode(pincode)?;
    }
    if let Some(info) = profile.additional_info.as_deref() {
        if info.len() > MAX_ADDITIONAL_INFO_LEN {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Additional info must be at most {MAX_ADDITIONAL_INFO_LEN} characters"
            ))));
        }
    }

    if profile.gst_available {
        require_gst_block(profile)?;
    }

    Ok(())
}

/// When GST is declared available, the full GST identity block is mandatory.
fn require_gst_block(profile: &CreateSellerProfile) -> Result<(), AppError> {
    let complete = profile.gstin.is_some()
        && profile.legal_name.is_some()
        && profile.pan.is_some()
        && profile.address_line1.is_some()
        && profile.city.is_some()
        && profile.state.is_some()
        && profile.pincode.is_some();
    if complete {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(
            "GST details are required when GST is available".into(),
        )))
    }
}
