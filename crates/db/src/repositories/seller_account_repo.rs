//! Repository for the `seller_accounts` table.
//!
//! Creation happens exclusively inside the approval transaction owned by
//! [`ApplicationRepo`](crate::repositories::ApplicationRepo); afterwards only
//! the feature flags ever change.

use sqlx::types::Json;
use sqlx::PgPool;

use broadway_core::features::SellerFeatures;
use broadway_core::types::DbId;

use crate::models::seller_account::SellerAccount;

/// Column list for seller_accounts queries.
const COLUMNS: &str = "id, user_id, certification_badge, features, created_at, updated_at";

pub struct SellerAccountRepo;

impl SellerAccountRepo {
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<SellerAccount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seller_accounts WHERE user_id = $1");
        sqlx::query_as::<_, SellerAccount>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace the account's feature flags.
    pub async fn update_features(
        pool: &PgPool,
        user_id: DbId,
        features: &SellerFeatures,
    ) -> Result<Option<SellerAccount>, sqlx::Error> {
        let query = format!(
            "UPDATE seller_accounts SET features = $2
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SellerAccount>(&query)
            .bind(user_id)
            .bind(Json(features))
            .fetch_optional(pool)
            .await
    }

    /// Number of accounts for a user. Always 0 or 1; exposed for tests of the
    /// double-approval guarantee.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM seller_accounts WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
