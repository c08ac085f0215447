//! Repository for the `onboarding_checklists` table.
//!
//! The checklist is lazily created on first read and mutated through a
//! read-modify-write of the typed [`Checklist`] under `FOR UPDATE`, so two
//! concurrent triggers for the same user cannot interleave.

use sqlx::types::Json;
use sqlx::PgPool;

use broadway_core::checklist::{Checklist, ChecklistKey, ItemStatus};
use broadway_core::types::DbId;

use crate::models::checklist::OnboardingChecklist;

/// Column list for onboarding_checklists queries.
const COLUMNS: &str = "id, user_id, items, created_at, updated_at";

/// Provides lazy creation and item updates for onboarding checklists.
pub struct ChecklistRepo;

impl ChecklistRepo {
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<OnboardingChecklist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM onboarding_checklists WHERE user_id = $1");
        sqlx::query_as::<_, OnboardingChecklist>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the user's checklist, creating an all-pending one if absent.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<OnboardingChecklist, sqlx::Error> {
        if let Some(existing) = Self::find_by_user_id(pool, user_id).await? {
            return Ok(existing);
        }

        // Another request may have created it in the meantime; the conflict
        // clause makes the insert a no-op and the follow-up select wins.
        let query = format!(
            "INSERT INTO onboarding_checklists (user_id, items)
             VALUES ($1, $2)
             ON CONFLICT (user_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, OnboardingChecklist>(&query)
            .bind(user_id)
            .bind(Json(Checklist::new()))
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(row) => Ok(row),
            None => {
                let query = format!("SELECT {COLUMNS} FROM onboarding_checklists WHERE user_id = $1");
                sqlx::query_as::<_, OnboardingChecklist>(&query)
                    .bind(user_id)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Idempotent completion latch, triggered as a side effect of creating a
    /// first product, bank detail, or address.
    ///
    /// Returns `true` only when the item flipped from pending to completed.
    /// A user without a checklist (not yet approved) is a silent no-op.
    pub async fn complete_item(
        pool: &PgPool,
        user_id: DbId,
        key: ChecklistKey,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM onboarding_checklists WHERE user_id = $1 FOR UPDATE"
        );
        let Some(row) = sqlx::query_as::<_, OnboardingChecklist>(&query)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(false);
        };

        let mut checklist = row.items.0;
        if !checklist.complete(key, chrono::Utc::now()) {
            return Ok(false);
        }

        sqlx::query("UPDATE onboarding_checklists SET items = $2 WHERE id = $1")
            .bind(row.id)
            .bind(Json(&checklist))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Manual item toggle for the checklist PATCH endpoint.
    ///
    /// Returns the updated row, or `None` when the user has no checklist.
    pub async fn set_item_status(
        pool: &PgPool,
        user_id: DbId,
        key: ChecklistKey,
        status: ItemStatus,
    ) -> Result<Option<OnboardingChecklist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM onboarding_checklists WHERE user_id = $1 FOR UPDATE"
        );
        let Some(row) = sqlx::query_as::<_, OnboardingChecklist>(&query)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut checklist = row.items.0;
        checklist.set_status(key, status, chrono::Utc::now());

        let query = format!(
            "UPDATE onboarding_checklists SET items = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, OnboardingChecklist>(&query)
            .bind(row.id)
            .bind(Json(&checklist))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }
}
