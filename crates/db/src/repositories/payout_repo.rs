//! Repository for the `payout_methods` table.

use sqlx::types::Json;
use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::payout::{BankDetails, PayoutMethod, TYPE_BANK};

/// Column list for payout_methods queries.
const COLUMNS: &str = "id, user_id, type, details, verified, created_at, updated_at";

/// Provides operations for payout bank details.
pub struct PayoutRepo;

impl PayoutRepo {
    /// The user's most recent payout method, if any.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<PayoutMethod>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payout_methods
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, PayoutMethod>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Save a bank payout method. Verification is mocked: the row is created
    /// already verified.
    pub async fn create_bank(
        pool: &PgPool,
        user_id: DbId,
        details: &BankDetails,
    ) -> Result<PayoutMethod, sqlx::Error> {
        let query = format!(
            "INSERT INTO payout_methods (user_id, type, details, verified)
             VALUES ($1, $2, $3, true)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PayoutMethod>(&query)
            .bind(user_id)
            .bind(TYPE_BANK)
            .bind(Json(details))
            .fetch_one(pool)
            .await
    }
}
