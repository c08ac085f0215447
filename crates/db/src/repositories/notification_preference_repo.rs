//! Repository for the `notification_preferences` table.

use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::notification_preference::{
    NotificationPreference, UpdateNotificationPreferences,
};

/// Column list for notification_preferences queries.
const COLUMNS: &str = "id, user_id, email, order_updates, payment_alerts, product_alerts, \
    created_at, updated_at";

pub struct NotificationPreferenceRepo;

impl NotificationPreferenceRepo {
    /// Fetch the user's preferences, creating the all-enabled default row if
    /// absent.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<NotificationPreference, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_preferences (user_id)
             VALUES ($1)
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationPreference>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Upsert the user's preferences.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateNotificationPreferences,
    ) -> Result<NotificationPreference, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_preferences
                (user_id, email, order_updates, payment_alerts, product_alerts)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (user_id) DO UPDATE SET
                email = EXCLUDED.email,
                order_updates = EXCLUDED.order_updates,
                payment_alerts = EXCLUDED.payment_alerts,
                product_alerts = EXCLUDED.product_alerts
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationPreference>(&query)
            .bind(user_id)
            .bind(input.email)
            .bind(input.order_updates)
            .bind(input.payment_alerts)
            .bind(input.product_alerts)
            .fetch_one(pool)
            .await
    }
}
