//! Route definitions for the favorites resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorites routes mounted at `/favorites`.
///
/// ```text
/// GET     /                -> list
/// POST    /                -> add_many
/// PUT     /                -> replace_all (403)
/// DELETE  /                -> delete_all
/// GET     /{campsite_id}   -> get_one (403)
/// POST    /{campsite_id}   -> add_one
/// PUT     /{campsite_id}   -> replace_one (403)
/// DELETE  /{campsite_id}   -> remove_one
/// OPTIONS both             -> preflight
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(favorites::list)
                .post(favorites::add_many)
                .put(favorites::replace_all)
                .delete(favorites::delete_all)
                .options(favorites::preflight),
        )
        .route(
            "/{campsite_id}",
            get(favorites::get_one)
                .post(favorites::add_one)
                .put(favorites::replace_one)
                .delete(favorites::remove_one)
                .options(favorites::preflight),
        )
}
