//! Repository for the `analytics_events` table.

use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::analytics_event::AnalyticsEvent;

/// Column list for analytics_events queries.
const COLUMNS: &str = "id, event_name, event_data, user_id, created_at, updated_at";

pub struct AnalyticsEventRepo;

impl AnalyticsEventRepo {
    /// Record a single event.
    pub async fn insert(
        pool: &PgPool,
        event_name: &str,
        event_data: &serde_json::Value,
        user_id: Option<DbId>,
    ) -> Result<AnalyticsEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO analytics_events (event_name, event_data, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnalyticsEvent>(&query)
            .bind(event_name)
            .bind(event_data)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Number of recorded events with the given name. Exposed for tests.
    pub async fn count_by_name(pool: &PgPool, event_name: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM analytics_events WHERE event_name = $1")
                .bind(event_name)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
