//! Seller application lifecycle entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use broadway_core::application::Timeline;
use broadway_core::types::{DbId, Timestamp};

use crate::models::message::AppMessage;
use crate::models::seller_profile::{CreateSellerProfile, SellerProfile};
use crate::models::user::User;

/// A row from the `seller_applications` table.
///
/// `timeline` is the typed append-only audit trail; it is stored as a JSONB
/// array and only ever grows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SellerApplication {
    pub id: DbId,
    pub user_id: DbId,
    pub profile_id: DbId,
    pub status: String,
    pub reviewer_id: Option<DbId>,
    pub timeline: Json<Timeline>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An application joined with its profile for the admin list view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationSummary {
    pub id: DbId,
    pub user_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub brand_name: String,
    pub category: String,
    pub full_name: String,
    /// Applicant's email, from the joined user row.
    pub email: String,
}

/// Full application detail: the row plus profile and message thread.
#[derive(Debug, Serialize)]
pub struct ApplicationDetail {
    #[serde(flatten)]
    pub application: SellerApplication,
    pub profile: SellerProfile,
    /// Newest first, for display.
    pub messages: Vec<AppMessage>,
}

/// Admin detail view additionally carries the applicant.
#[derive(Debug, Serialize)]
pub struct AdminApplicationDetail {
    #[serde(flatten)]
    pub application: SellerApplication,
    pub profile: SellerProfile,
    pub user: User,
    pub messages: Vec<AppMessage>,
}

/// Request body for application submission: contact identity plus the full
/// profile snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitApplication {
    pub email: String,
    #[serde(flatten)]
    pub profile: CreateSellerProfile,
}

/// Request body for the admin review endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub action: String,
    pub message: Option<String>,
}

/// Request body for the seller clarification endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ClarificationRequest {
    pub message: String,
}
