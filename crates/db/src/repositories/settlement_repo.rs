//! Repository for the `settlements` table. Read-only: settlements are
//! produced by an out-of-band billing process.

use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::settlement::Settlement;

/// Column list for settlements queries.
const COLUMNS: &str = "id, user_id, amount, fees, period_start, period_end, \
    expected_payout_date, status, created_at, updated_at";

pub struct SettlementRepo;

impl SettlementRepo {
    /// List a user's settlements, most recent period first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Settlement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM settlements
             WHERE user_id = $1
             ORDER BY period_end DESC"
        );
        sqlx::query_as::<_, Settlement>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
