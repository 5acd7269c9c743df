use std::sync::Arc;

use campsite_db::store::{CampsiteCatalog, FavoriteStore, UserDirectory};

use crate::auth::Authenticator;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Every collaborator is injected as a trait object, so the same handlers
/// run against PostgreSQL in production and an in-memory store in tests.
/// Cheaply cloneable (all fields are `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Verifies bearer tokens for [`crate::middleware::auth::AuthUser`].
    pub authenticator: Arc<dyn Authenticator>,
    /// Per-user favorites records.
    pub favorites: Arc<dyn FavoriteStore>,
    /// Campsite lookup.
    pub catalog: Arc<dyn CampsiteCatalog>,
    /// Owner lookup when expanding a record.
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    /// Build state where one store serves as favorites store, catalog and
    /// user directory.
    pub fn with_store<S>(
        config: ServerConfig,
        authenticator: Arc<dyn Authenticator>,
        store: Arc<S>,
    ) -> Self
    where
        S: FavoriteStore + CampsiteCatalog + UserDirectory + 'static,
    {
        Self {
            config: Arc::new(config),
            authenticator,
            favorites: store.clone(),
            catalog: store.clone(),
            users: store,
        }
    }
}
