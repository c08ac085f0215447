//! Analytics event rows written by the event-persistence task.

use serde::Serialize;
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// A row from the `analytics_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnalyticsEvent {
    pub id: DbId,
    pub event_name: String,
    pub event_data: serde_json::Value,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
