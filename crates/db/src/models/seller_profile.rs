//! Seller profile: the business-identity snapshot captured at application
//! time. Immutable after creation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// A row from the `seller_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SellerProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: String,
    pub phone: String,
    pub brand_name: String,
    pub category: String,
    pub availability_stage: String,
    pub gst_available: bool,
    pub gstin: Option<String>,
    pub legal_name: Option<String>,
    pub pan: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub company_name: Option<String>,
    pub cin: Option<String>,
    pub website: Option<String>,
    pub additional_info: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a profile during application submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSellerProfile {
    pub full_name: String,
    pub phone: String,
    pub brand_name: String,
    pub category: String,
    pub availability_stage: String,
    pub gst_available: bool,
    pub gstin: Option<String>,
    pub legal_name: Option<String>,
    pub pan: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub company_name: Option<String>,
    pub cin: Option<String>,
    pub website: Option<String>,
    pub additional_info: Option<String>,
}
