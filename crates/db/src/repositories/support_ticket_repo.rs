//! Repository for the `support_tickets` table.

use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::support_ticket::{CreateSupportTicket, SupportTicket};

/// Column list for support_tickets queries.
const COLUMNS: &str = "id, user_id, subject, message, status, created_at, updated_at";

pub struct SupportTicketRepo;

impl SupportTicketRepo {
    /// List a user's tickets, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SupportTicket>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM support_tickets
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, SupportTicket>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Open a new ticket.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSupportTicket,
    ) -> Result<SupportTicket, sqlx::Error> {
        let query = format!(
            "INSERT INTO support_tickets (user_id, subject, message, status)
             VALUES ($1, $2, $3, 'open')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SupportTicket>(&query)
            .bind(user_id)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }
}
