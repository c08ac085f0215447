//! Seller API key entity model.
//!
//! Only the hash and a display prefix are stored; the plaintext is returned
//! exactly once on creation via [`ApiKeyCreatedResponse`].

use serde::Serialize;
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// A row from the `api_keys` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApiKey {
    pub id: DbId,
    pub user_id: DbId,
    #[serde(skip_serializing)]
    pub key_hash: String,
    pub key_prefix: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Creation response carrying the plaintext key (shown once, never stored).
#[derive(Debug, Serialize)]
pub struct ApiKeyCreatedResponse {
    pub id: DbId,
    pub key_prefix: String,
    pub api_key: String,
    pub created_at: Timestamp,
}
