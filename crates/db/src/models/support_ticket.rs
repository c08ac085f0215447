//! Support ticket entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// A row from the `support_tickets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SupportTicket {
    pub id: DbId,
    pub user_id: DbId,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for opening a ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSupportTicket {
    pub subject: String,
    pub message: String,
}
