//! Repository for the `seller_profiles` table.
//!
//! Profiles are created inside the submission transaction owned by
//! [`ApplicationRepo`](crate::repositories::ApplicationRepo); this repo only
//! provides reads.

use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::seller_profile::SellerProfile;

pub(crate) const COLUMNS: &str = "id, user_id, full_name, phone, brand_name, category, \
    availability_stage, gst_available, gstin, legal_name, pan, address_line1, address_line2, \
    city, state, pincode, company_name, cin, website, additional_info, created_at, updated_at";

pub struct SellerProfileRepo;

impl SellerProfileRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SellerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seller_profiles WHERE id = $1");
        sqlx::query_as::<_, SellerProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<SellerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seller_profiles WHERE user_id = $1");
        sqlx::query_as::<_, SellerProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
