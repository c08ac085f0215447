//! Onboarding checklist entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use broadway_core::checklist::Checklist;
use broadway_core::types::{DbId, Timestamp};

/// A row from the `onboarding_checklists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnboardingChecklist {
    pub id: DbId,
    pub user_id: DbId,
    /// Exactly six items in fixed order; the shape is guaranteed by the type.
    pub items: Json<Checklist>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for the manual checklist item toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChecklistItem {
    pub key: String,
    pub status: String,
}
