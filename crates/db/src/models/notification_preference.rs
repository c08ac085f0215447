//! Notification preference entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// A row from the `notification_preferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationPreference {
    pub id: DbId,
    pub user_id: DbId,
    pub email: bool,
    pub order_updates: bool,
    pub payment_alerts: bool,
    pub product_alerts: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for replacing the caller's notification preferences.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateNotificationPreferences {
    pub email: bool,
    pub order_updates: bool,
    pub payment_alerts: bool,
    pub product_alerts: bool,
}
