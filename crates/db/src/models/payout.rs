//! Payout method (bank detail) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// Payout method type for bank transfers (the only one supported today).
pub const TYPE_BANK: &str = "bank";

/// Bank account details, stored as a typed JSONB document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_holder: String,
    pub account_number: String,
    pub ifsc: String,
    pub bank_name: String,
}

/// A row from the `payout_methods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PayoutMethod {
    pub id: DbId,
    pub user_id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub method_type: String,
    pub details: Json<BankDetails>,
    pub verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
