//! Repository for the `favorites` table.
//!
//! The favorites list is stored whole in `campsite_ids`; callers mutate it in
//! memory and write the full array back.

use campsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::Favorite;

/// Column list for `favorites` queries.
const COLUMNS: &str = "id, user_id, campsite_ids, created_at, updated_at";

/// Provides data access for per-user favorites records.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Get the favorites record for a user, if one was ever created.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE user_id = $1");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new record for `user_id`.
    ///
    /// Fails with a `uq_favorites_user_id` violation if the user already has one.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        campsite_ids: &[DbId],
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, campsite_ids) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(campsite_ids)
            .fetch_one(pool)
            .await
    }

    /// Overwrite the campsite list of an existing record.
    ///
    /// Returns `RowNotFound` if the record was deleted in the meantime.
    pub async fn update_campsites(
        pool: &PgPool,
        id: DbId,
        campsite_ids: &[DbId],
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "UPDATE favorites SET campsite_ids = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(id)
            .bind(campsite_ids)
            .fetch_one(pool)
            .await
    }

    /// Delete a user's record, returning the deleted row.
    pub async fn delete_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!("DELETE FROM favorites WHERE user_id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
