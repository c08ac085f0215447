//! Handlers for support tickets.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use broadway_core::analytics::EVENT_SUPPORT_TICKET_CREATED;
use broadway_core::error::CoreError;
use broadway_core::validation::require_non_empty;
use broadway_db::models::support_ticket::CreateSupportTicket;
use broadway_db::repositories::{SupportTicketRepo, UserRepo};
use broadway_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/support
pub async fn list_tickets(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tickets = SupportTicketRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: tickets }))
}

/// POST /api/v1/support
///
/// Open a ticket and send the confirmation email.
pub async fn create_ticket(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSupportTicket>,
) -> AppResult<impl IntoResponse> {
    require_non_empty(&input.subject, "Subject")?;
    require_non_empty(&input.message, "Message")?;

    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let ticket = SupportTicketRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        ticket_id = ticket.id,
        "Support ticket created"
    );

    state.event_bus.publish(
        PlatformEvent::new(EVENT_SUPPORT_TICKET_CREATED)
            .with_actor(auth.user_id)
            .with_recipient(&user.email)
            .with_payload(serde_json::json!({
                "ticket_id": ticket.id,
                "subject": &ticket.subject,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: ticket })))
}
