pub mod favorites;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /favorites                  list, bulk add, delete all (PUT rejected)
/// /favorites/{campsite_id}    add one, remove one (GET, PUT rejected)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/favorites", favorites::router())
}
