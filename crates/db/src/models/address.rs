//! Pickup/return address entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use broadway_core::types::{DbId, Timestamp};

/// Address type values.
pub const TYPE_PICKUP: &str = "pickup";
pub const TYPE_RETURN: &str = "return";

/// A row from the `addresses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Address {
    pub id: DbId,
    pub user_id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub address_type: String,
    pub name: String,
    pub phone: String,
    pub line1: String,
    pub line2: Option<String>,
    pub landmark: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an address.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAddress {
    #[serde(rename = "type")]
    pub address_type: String,
    pub name: String,
    pub phone: String,
    pub line1: String,
    pub line2: Option<String>,
    pub landmark: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub is_default: bool,
}

/// DTO for partially updating an address. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAddress {
    #[serde(rename = "type")]
    pub address_type: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub landmark: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub is_default: Option<bool>,
}
