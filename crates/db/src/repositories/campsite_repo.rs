//! Read-only access to the `campsites` catalog.

use campsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::campsite::Campsite;

/// Column list for `campsites` queries.
const COLUMNS: &str = "\
    id, name, description, image, elevation, cost, featured, \
    created_at, updated_at";

pub struct CampsiteRepo;

impl CampsiteRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campsite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campsites WHERE id = $1");
        sqlx::query_as::<_, Campsite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every campsite whose id is in `ids`, in no particular order.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Campsite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campsites WHERE id = ANY($1)");
        sqlx::query_as::<_, Campsite>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
