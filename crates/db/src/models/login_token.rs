//! Magic-link login token entity model.

use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// A row from the `login_tokens` table.
///
/// Never serialized to API responses; the token itself only travels inside
/// the sign-in email.
#[derive(Debug, Clone, FromRow)]
pub struct LoginToken {
    pub id: DbId,
    pub email: String,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub used_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
