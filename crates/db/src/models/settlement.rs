//! Settlement entity model: computed payouts per period, net of fees.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// Platform fee breakdown for a settlement period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementFees {
    pub commission: f64,
    pub payment: f64,
    pub shipping: f64,
}

/// A row from the `settlements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Settlement {
    pub id: DbId,
    pub user_id: DbId,
    pub amount: f64,
    pub fees: Json<SettlementFees>,
    pub period_start: Timestamp,
    pub period_end: Timestamp,
    pub expected_payout_date: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
