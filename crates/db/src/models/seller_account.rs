//! Seller account: created exactly once at approval time.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

use broadway_core::features::SellerFeatures;
use broadway_core::types::{DbId, Timestamp};

/// A row from the `seller_accounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SellerAccount {
    pub id: DbId,
    pub user_id: DbId,
    pub certification_badge: bool,
    pub features: Json<SellerFeatures>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
