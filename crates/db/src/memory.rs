//! In-process implementation of the store, catalog and user directory traits.
//!
//! Used by the API integration tests and for running the server without a
//! database. It counts persistence writes so callers can assert that no-op
//! requests never reach the store, and it can be switched into a failing mode
//! to exercise error paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use campsite_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::campsite::Campsite;
use crate::models::favorite::Favorite;
use crate::models::user::UserSummary;
use crate::store::{CampsiteCatalog, FavoriteStore, StoreError, StoreResult, UserDirectory};

#[derive(Default)]
struct Tables {
    next_id: DbId,
    /// Keyed by owner id.
    favorites: BTreeMap<DbId, Favorite>,
    campsites: BTreeMap<DbId, Campsite>,
    users: BTreeMap<DbId, UserSummary>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    writes: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a campsite to the catalog.
    pub async fn insert_campsite(&self, name: &str) -> Campsite {
        let mut tables = self.tables.write().await;
        let now = chrono::Utc::now();
        let campsite = Campsite {
            id: tables.next_id(),
            name: name.to_string(),
            description: format!("{name} description"),
            image: None,
            elevation: 0,
            cost: 0,
            featured: false,
            created_at: now,
            updated_at: now,
        };
        tables.campsites.insert(campsite.id, campsite.clone());
        campsite
    }

    /// Remove a campsite from the catalog. Favorites lists keep its id.
    pub async fn remove_campsite(&self, id: DbId) -> bool {
        self.tables.write().await.campsites.remove(&id).is_some()
    }

    pub async fn insert_user(&self, username: &str) -> UserSummary {
        let mut tables = self.tables.write().await;
        let user = UserSummary {
            id: tables.next_id(),
            username: username.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            admin: false,
        };
        tables.users.insert(user.id, user.clone());
        user
    }

    /// Current record for a user, read without going through the trait.
    pub async fn favorite_of(&self, user_id: DbId) -> Option<Favorite> {
        self.tables.read().await.favorites.get(&user_id).cloned()
    }

    /// Number of create, save and delete calls that reached the store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every trait call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl FavoriteStore for InMemoryStore {
    async fn find_by_user(&self, user_id: DbId) -> StoreResult<Option<Favorite>> {
        self.check_available()?;
        Ok(self.favorite_of(user_id).await)
    }

    async fn create(&self, user_id: DbId, campsite_ids: &[DbId]) -> StoreResult<Favorite> {
        self.check_available()?;
        self.record_write();
        let mut tables = self.tables.write().await;
        if tables.favorites.contains_key(&user_id) {
            return Err(StoreError::DuplicateRecord { user_id });
        }
        let now = chrono::Utc::now();
        let favorite = Favorite {
            id: tables.next_id(),
            user_id,
            campsite_ids: campsite_ids.to_vec(),
            created_at: now,
            updated_at: now,
        };
        tables.favorites.insert(user_id, favorite.clone());
        Ok(favorite)
    }

    async fn save_campsites(
        &self,
        favorite_id: DbId,
        campsite_ids: &[DbId],
    ) -> StoreResult<Favorite> {
        self.check_available()?;
        self.record_write();
        let mut tables = self.tables.write().await;
        let favorite = tables
            .favorites
            .values_mut()
            .find(|f| f.id == favorite_id)
            .ok_or(sqlx::Error::RowNotFound)?;
        favorite.campsite_ids = campsite_ids.to_vec();
        favorite.updated_at = chrono::Utc::now();
        Ok(favorite.clone())
    }

    async fn delete_by_user(&self, user_id: DbId) -> StoreResult<Option<Favorite>> {
        self.check_available()?;
        self.record_write();
        Ok(self.tables.write().await.favorites.remove(&user_id))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }
}

#[async_trait]
impl CampsiteCatalog for InMemoryStore {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Campsite>> {
        self.check_available()?;
        Ok(self.tables.read().await.campsites.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[DbId]) -> StoreResult<Vec<Campsite>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.campsites.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl UserDirectory for InMemoryStore {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<UserSummary>> {
        self.check_available()?;
        Ok(self.tables.read().await.users.get(&id).cloned())
    }
}
