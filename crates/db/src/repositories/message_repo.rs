//! Repository for the `app_messages` table.

use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::message::{AppMessage, CreateAppMessage};

/// Column list for app_messages queries.
const COLUMNS: &str = "id, application_id, from_type, from_user_id, body, created_at, updated_at";

/// Provides append/list operations for application messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Append a message to an application's thread.
    pub async fn create(pool: &PgPool, input: &CreateAppMessage) -> Result<AppMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO app_messages (application_id, from_type, from_user_id, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppMessage>(&query)
            .bind(input.application_id)
            .bind(&input.from_type)
            .bind(input.from_user_id)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// List an application's messages, newest first (display order).
    pub async fn list_for_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Vec<AppMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM app_messages
             WHERE application_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, AppMessage>(&query)
            .bind(application_id)
            .fetch_all(pool)
            .await
    }
}
