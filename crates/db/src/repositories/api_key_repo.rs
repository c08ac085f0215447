//! Repository for the `api_keys` table.

use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::api_key::ApiKey;

/// Column list for api_keys queries.
const COLUMNS: &str = "id, user_id, key_hash, key_prefix, created_at, updated_at";

pub struct ApiKeyRepo;

impl ApiKeyRepo {
    /// Store a freshly generated key's hash and display prefix.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        key_hash: &str,
        key_prefix: &str,
    ) -> Result<ApiKey, sqlx::Error> {
        let query = format!(
            "INSERT INTO api_keys (user_id, key_hash, key_prefix)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApiKey>(&query)
            .bind(user_id)
            .bind(key_hash)
            .bind(key_prefix)
            .fetch_one(pool)
            .await
    }

    /// The user's most recently generated key (older keys are superseded).
    pub async fn find_latest_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<ApiKey>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM api_keys
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, ApiKey>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
