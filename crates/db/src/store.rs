//! Collaborator traits injected into the API layer.
//!
//! Handlers depend on these traits rather than on a pool, so the backing store
//! and the campsite catalog can be swapped (PostgreSQL in production,
//! [`crate::memory::InMemoryStore`] in tests).

use std::collections::HashMap;

use async_trait::async_trait;
use campsite_core::types::DbId;

use crate::models::campsite::Campsite;
use crate::models::favorite::Favorite;
use crate::models::user::UserSummary;
use crate::repositories::{CampsiteRepo, FavoriteRepo, UserRepo};
use crate::DbPool;

/// Failure of a store, catalog or user-directory call.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The user already owns a favorites record, e.g. a concurrent request
    /// created it between lookup and insert.
    #[error("favorites record already exists for user {user_id}")]
    DuplicateRecord { user_id: DbId },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Name of the constraint that keeps one favorites record per user.
const FAVORITES_USER_CONSTRAINT: &str = "uq_favorites_user_id";

/// Whether `err` is a unique-constraint violation (`23505`) on `constraint`.
fn violates_unique(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

/// Persistence for per-user favorites records.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn find_by_user(&self, user_id: DbId) -> StoreResult<Option<Favorite>>;

    async fn create(&self, user_id: DbId, campsite_ids: &[DbId]) -> StoreResult<Favorite>;

    /// Persist the full campsite list of an existing record.
    async fn save_campsites(
        &self,
        favorite_id: DbId,
        campsite_ids: &[DbId],
    ) -> StoreResult<Favorite>;

    /// Remove the user's record, returning it if there was one.
    async fn delete_by_user(&self, user_id: DbId) -> StoreResult<Option<Favorite>>;

    /// Check that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

/// Resolves campsite ids against the catalog.
#[async_trait]
pub trait CampsiteCatalog: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Campsite>>;

    /// Resolve `ids` in the given order, skipping ids with no campsite.
    async fn find_many(&self, ids: &[DbId]) -> StoreResult<Vec<Campsite>>;
}

/// Resolves user ids to their public profile.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<UserSummary>>;
}

/// Arrange `campsites` in the order of `ids`, dropping ids without a match.
pub fn order_by_ids(ids: &[DbId], campsites: Vec<Campsite>) -> Vec<Campsite> {
    let mut by_id: HashMap<DbId, Campsite> = campsites.into_iter().map(|c| (c.id, c)).collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// PostgreSQL-backed implementation of every collaborator trait.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteStore for PgStore {
    async fn find_by_user(&self, user_id: DbId) -> StoreResult<Option<Favorite>> {
        Ok(FavoriteRepo::find_by_user(&self.pool, user_id).await?)
    }

    async fn create(&self, user_id: DbId, campsite_ids: &[DbId]) -> StoreResult<Favorite> {
        FavoriteRepo::create(&self.pool, user_id, campsite_ids)
            .await
            .map_err(|err| {
                if violates_unique(&err, FAVORITES_USER_CONSTRAINT) {
                    StoreError::DuplicateRecord { user_id }
                } else {
                    StoreError::Database(err)
                }
            })
    }

    async fn save_campsites(
        &self,
        favorite_id: DbId,
        campsite_ids: &[DbId],
    ) -> StoreResult<Favorite> {
        Ok(FavoriteRepo::update_campsites(&self.pool, favorite_id, campsite_ids).await?)
    }

    async fn delete_by_user(&self, user_id: DbId) -> StoreResult<Option<Favorite>> {
        Ok(FavoriteRepo::delete_by_user(&self.pool, user_id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

#[async_trait]
impl CampsiteCatalog for PgStore {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Campsite>> {
        Ok(CampsiteRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_many(&self, ids: &[DbId]) -> StoreResult<Vec<Campsite>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let campsites = CampsiteRepo::find_by_ids(&self.pool, ids).await?;
        if campsites.len() < ids.len() {
            tracing::debug!(
                requested = ids.len(),
                found = campsites.len(),
                "Some favorited campsites are no longer in the catalog",
            );
        }
        Ok(order_by_ids(ids, campsites))
    }
}

#[async_trait]
impl UserDirectory for PgStore {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<UserSummary>> {
        Ok(UserRepo::find_summary(&self.pool, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campsite(id: DbId) -> Campsite {
        let now = chrono::Utc::now();
        Campsite {
            id,
            name: format!("Site {id}"),
            description: String::new(),
            image: None,
            elevation: 0,
            cost: 0,
            featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn order_by_ids_follows_list_and_skips_missing() {
        let fetched = vec![campsite(3), campsite(1), campsite(2)];
        let ordered = order_by_ids(&[2, 9, 3, 1], fetched);
        let ids: Vec<DbId> = ordered.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!violates_unique(&sqlx::Error::RowNotFound, FAVORITES_USER_CONSTRAINT));
        assert!(!violates_unique(&sqlx::Error::PoolTimedOut, FAVORITES_USER_CONSTRAINT));
    }
}
