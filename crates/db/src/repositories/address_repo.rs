//! Repository for the `addresses` table.
//!
//! Default selection is a two-step clear-then-set sequence; both steps run in
//! one transaction so concurrent reassignments for the same (user, type)
//! converge to exactly one default. A partial unique index backstops the
//! invariant even against interleavings the transaction cannot see.

use sqlx::PgPool;

use broadway_core::types::DbId;

use crate::models::address::{Address, CreateAddress, UpdateAddress};

/// Column list for addresses queries.
const COLUMNS: &str = "id, user_id, type, name, phone, line1, line2, landmark, city, \
    state, pincode, is_default, created_at, updated_at";

/// Provides CRUD and default-selection operations for addresses.
pub struct AddressRepo;

impl AddressRepo {
    /// List a user's addresses, defaults first, then newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Address>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM addresses
             WHERE user_id = $1
             ORDER BY is_default DESC, created_at DESC"
        );
        sqlx::query_as::<_, Address>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Address>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM addresses WHERE id = $1");
        sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new address. When it is flagged as default, every other
    /// default of the same (user, type) is cleared first, in the same
    /// transaction.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateAddress,
    ) -> Result<Address, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if input.is_default {
            sqlx::query(
                "UPDATE addresses SET is_default = false
                 WHERE user_id = $1 AND type = $2 AND is_default",
            )
            .bind(user_id)
            .bind(&input.address_type)
            .execute(&mut *tx)
            .await?;
        }

        let query = format!(
            "INSERT INTO addresses
                (user_id, type, name, phone, line1, line2, landmark, city, state,
                 pincode, is_default)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let address = sqlx::query_as::<_, Address>(&query)
            .bind(user_id)
            .bind(&input.address_type)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.line1)
            .bind(&input.line2)
            .bind(&input.landmark)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.pincode)
            .bind(input.is_default)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(address)
    }

    /// Partially update an address. When the update sets the default flag,
    /// other defaults of the (possibly changed) type are cleared first.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        target_type: &str,
        input: &UpdateAddress,
    ) -> Result<Option<Address>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if input.is_default == Some(true) {
            sqlx::query(
                "UPDATE addresses SET is_default = false
                 WHERE user_id = $1 AND type = $2 AND is_default AND id != $3",
            )
            .bind(user_id)
            .bind(target_type)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        let query = format!(
            "UPDATE addresses SET
                type = COALESCE($2, type),
                name = COALESCE($3, name),
                phone = COALESCE($4, phone),
                line1 = COALESCE($5, line1),
                line2 = COALESCE($6, line2),
                landmark = COALESCE($7, landmark),
                city = COALESCE($8, city),
                state = COALESCE($9, state),
                pincode = COALESCE($10, pincode),
                is_default = COALESCE($11, is_default)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let address = sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .bind(&input.address_type)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.line1)
            .bind(&input.line2)
            .bind(&input.landmark)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.pincode)
            .bind(input.is_default)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(address)
    }

    /// Make the given address the sole default of its (user, type) pair.
    pub async fn set_default(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        address_type: &str,
    ) -> Result<Option<Address>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE addresses SET is_default = false
             WHERE user_id = $1 AND type = $2 AND is_default AND id != $3",
        )
        .bind(user_id)
        .bind(address_type)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE addresses SET is_default = true
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let address = sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(address)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
