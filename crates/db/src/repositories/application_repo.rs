//! Repository for the `seller_applications` table and the multi-table
//! transitions of the application lifecycle.
//!
//! Every transition (submission, admin review, clarification) runs inside a
//! single transaction so a failure leaves nothing half-written. Timeline
//! writes only ever use the JSONB concat operator, so the audit trail is
//! append-only at the storage level as well as in the Rust type.

use sqlx::types::Json;
use sqlx::PgPool;

use broadway_core::application::{Timeline, TimelineEvent};
use broadway_core::checklist::Checklist;
use broadway_core::features::SellerFeatures;
use broadway_core::types::DbId;

use crate::models::application::{ApplicationSummary, SellerApplication};
use crate::models::seller_profile::{CreateSellerProfile, SellerProfile};

/// Column list for seller_applications queries.
const COLUMNS: &str = "id, user_id, profile_id, status, reviewer_id, timeline, \
    created_at, updated_at";

/// Result of an admin review transition.
#[derive(Debug)]
pub struct ReviewOutcome {
    pub application: SellerApplication,
    /// Whether this call created the seller account (false on re-approval).
    pub account_created: bool,
    /// Whether this call created the onboarding checklist.
    pub checklist_created: bool,
}

/// Provides lifecycle operations for seller applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Create the profile and the application in one transaction.
    ///
    /// The application starts with the given initial timeline (normally a
    /// single "Application submitted" event).
    pub async fn create_with_profile(
        pool: &PgPool,
        user_id: DbId,
        profile: &CreateSellerProfile,
        timeline: &Timeline,
    ) -> Result<(SellerApplication, SellerProfile), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let profile_query = format!(
            "INSERT INTO seller_profiles
                (user_id, full_name, phone, brand_name, category, availability_stage,
                 gst_available, gstin, legal_name, pan, address_line1, address_line2,
                 city, state, pincode, company_name, cin, website, additional_info)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                 $16, $17, $18, $19)
             RETURNING {}",
            super::seller_profile_repo::COLUMNS
        );
        let created_profile = sqlx::query_as::<_, SellerProfile>(&profile_query)
            .bind(user_id)
            .bind(&profile.full_name)
            .bind(&profile.phone)
            .bind(&profile.brand_name)
            .bind(&profile.category)
            .bind(&profile.availability_stage)
            .bind(profile.gst_available)
            .bind(&profile.gstin)
            .bind(&profile.legal_name)
            .bind(&profile.pan)
            .bind(&profile.address_line1)
            .bind(&profile.address_line2)
            .bind(&profile.city)
            .bind(&profile.state)
            .bind(&profile.pincode)
            .bind(&profile.company_name)
            .bind(&profile.cin)
            .bind(&profile.website)
            .bind(&profile.additional_info)
            .fetch_one(&mut *tx)
            .await?;

        let application_query = format!(
            "INSERT INTO seller_applications (user_id, profile_id, status, timeline)
             VALUES ($1, $2, 'submitted', $3)
             RETURNING {COLUMNS}"
        );
        let application = sqlx::query_as::<_, SellerApplication>(&application_query)
            .bind(user_id)
            .bind(created_profile.id)
            .bind(Json(timeline))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((application, created_profile))
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SellerApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seller_applications WHERE id = $1");
        sqlx::query_as::<_, SellerApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<SellerApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seller_applications WHERE user_id = $1");
        sqlx::query_as::<_, SellerApplication>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Admin list view: every application joined with its profile and the
    /// applicant's email, newest first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ApplicationSummary>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationSummary>(
            "SELECT a.id, a.user_id, a.status, a.created_at,
                    p.brand_name, p.category, p.full_name, u.email
             FROM seller_applications a
             JOIN seller_profiles p ON p.id = a.profile_id
             JOIN users u ON u.id = a.user_id
             ORDER BY a.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Apply an admin review transition in one transaction.
    ///
    /// Sets the new status and reviewer, appends the timeline event, and,
    /// when `provision` is set (approval), creates the seller account and
    /// onboarding checklist. Both provisioning inserts are
    /// `ON CONFLICT (user_id) DO NOTHING`, so a duplicate approve call can
    /// never produce a second account or checklist. An optional admin message
    /// is appended to the application's thread.
    ///
    /// Returns `None` when the application does not exist.
    pub async fn apply_review(
        pool: &PgPool,
        application_id: DbId,
        reviewer_id: DbId,
        new_status: &str,
        event: &TimelineEvent,
        admin_message: Option<&str>,
        provision: bool,
    ) -> Result<Option<ReviewOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE seller_applications
             SET status = $2, reviewer_id = $3, timeline = timeline || $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(application) = sqlx::query_as::<_, SellerApplication>(&update_query)
            .bind(application_id)
            .bind(new_status)
            .bind(reviewer_id)
            .bind(Json(event))
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut account_created = false;
        let mut checklist_created = false;

        if provision {
            let result = sqlx::query(
                "INSERT INTO seller_accounts (user_id, certification_badge, features)
                 VALUES ($1, true, $2)
                 ON CONFLICT (user_id) DO NOTHING",
            )
            .bind(application.user_id)
            .bind(Json(SellerFeatures::default()))
            .execute(&mut *tx)
            .await?;
            account_created = result.rows_affected() == 1;

            let result = sqlx::query(
                "INSERT INTO onboarding_checklists (user_id, items)
                 VALUES ($1, $2)
                 ON CONFLICT (user_id) DO NOTHING",
            )
            .bind(application.user_id)
            .bind(Json(Checklist::new()))
            .execute(&mut *tx)
            .await?;
            checklist_created = result.rows_affected() == 1;
        }

        if let Some(body) = admin_message {
            sqlx::query(
                "INSERT INTO app_messages (application_id, from_type, from_user_id, body)
                 VALUES ($1, 'admin', $2, $3)",
            )
            .bind(application_id)
            .bind(reviewer_id)
            .bind(body)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(ReviewOutcome {
            application,
            account_created,
            checklist_created,
        }))
    }

    /// Record a seller's answer to a clarification request in one
    /// transaction: status change, timeline append, and the seller's message.
    pub async fn submit_clarification(
        pool: &PgPool,
        application_id: DbId,
        user_id: DbId,
        event: &TimelineEvent,
        message: &str,
    ) -> Result<Option<SellerApplication>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE seller_applications
             SET status = $2, timeline = timeline || $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(application) = sqlx::query_as::<_, SellerApplication>(&update_query)
            .bind(application_id)
            .bind(event.status.as_str())
            .bind(Json(event))
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query(
            "INSERT INTO app_messages (application_id, from_type, from_user_id, body)
             VALUES ($1, 'seller', $2, $3)",
        )
        .bind(application_id)
        .bind(user_id)
        .bind(message)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(application))
    }
}
