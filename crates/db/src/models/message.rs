//! Application correspondence thread messages.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// Sender kind for an application message.
pub const FROM_ADMIN: &str = "admin";
pub const FROM_SELLER: &str = "seller";
pub const FROM_SYSTEM: &str = "system";

/// A row from the `app_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppMessage {
    pub id: DbId,
    pub application_id: DbId,
    pub from_type: String,
    pub from_user_id: Option<DbId>,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a message to an application's thread.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppMessage {
    pub application_id: DbId,
    pub from_type: String,
    pub from_user_id: Option<DbId>,
    pub body: String,
}
