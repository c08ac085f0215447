//! Seller account feature flags.
//!
//! Today the only flag group is RTO (Return-to-Origin) Shield. The struct is
//! stored as a JSONB column on `seller_accounts` and deserialized whole, so
//! adding a flag group means adding a field here with a serde default.

use serde::{Deserialize, Serialize};

/// RTO Shield flag bundle. Every flag is on for a freshly approved seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtoShieldSettings {
    pub enabled: bool,
    pub address_validation: bool,
    pub cod_otp: bool,
    pub prepaid_nudge: bool,
}

impl Default for RtoShieldSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            address_validation: true,
            cod_otp: true,
            prepaid_nudge: true,
        }
    }
}

/// All feature-flag groups on a seller account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerFeatures {
    #[serde(default)]
    pub rto_shield: RtoShieldSettings,
}
