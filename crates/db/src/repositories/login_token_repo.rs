//! Repository for the `login_tokens` table backing the magic-link flow.

use sqlx::PgPool;

use broadway_core::types::Timestamp;

use crate::models::login_token::LoginToken;

/// Column list for login_tokens queries.
const COLUMNS: &str = "id, email, token_hash, expires_at, used_at, created_at, updated_at";

pub struct LoginTokenRepo;

impl LoginTokenRepo {
    /// Issue a token for the given email. Only the hash is stored.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<LoginToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO login_tokens (email, token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoginToken>(&query)
            .bind(email)
            .bind(token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Consume a token: atomically stamp used_at on an unused, unexpired
    /// token with this hash. Returns the row when the token was valid;
    /// `None` means unknown, expired, or already used.
    pub async fn consume(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<LoginToken>, sqlx::Error> {
        let query = format!(
            "UPDATE login_tokens SET used_at = now()
             WHERE token_hash = $1 AND used_at IS NULL AND expires_at > now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoginToken>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }
}
