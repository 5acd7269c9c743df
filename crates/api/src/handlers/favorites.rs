//! Handlers for the `/favorites` resource.
//!
//! Each user owns at most one favorites record. Requests that change nothing
//! (nothing new to add, nothing to remove, unknown campsite) answer 200 with
//! a plain-text notice instead of the record.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use campsite_core::error::CoreError;
use campsite_core::favorites::{
    add_campsite, first_duplicate, merge_campsites, remove_campsite, FavoriteNotice, Removal,
};
use campsite_core::types::DbId;
use campsite_db::models::favorite::{AddFavorites, Favorite, FavoriteDetail};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{data, notice, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Collection: /favorites
// ---------------------------------------------------------------------------

/// GET /api/v1/favorites
///
/// List the caller's favorites with owner and campsites expanded. The array
/// holds at most one record and is empty if the user never added any.
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FavoriteDetail>>>> {
    let detail = match state.favorites.find_by_user(user.user_id).await? {
        Some(favorite) => vec![expand(&state, favorite).await?],
        None => Vec::new(),
    };
    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/favorites
///
/// Bulk add. Creates the record from the submitted ids, or appends the ids
/// not already present. Catalog existence is not checked on this path.
///
/// Repeats within the body collapse when appending; a body that would create
/// a record holding the same id twice is rejected.
pub async fn add_many(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddFavorites>,
) -> AppResult<Response> {
    input.validate()?;
    let submitted = input.campsite_ids();

    let favorite = match state.favorites.find_by_user(user.user_id).await? {
        Some(mut favorite) => {
            let added = merge_campsites(&mut favorite.campsite_ids, &submitted);
            if added == 0 {
                return Ok(notice(FavoriteNotice::NothingNew));
            }
            let saved = state
                .favorites
                .save_campsites(favorite.id, &favorite.campsite_ids)
                .await?;
            tracing::info!(user_id = user.user_id, added, "Favorites added");
            saved
        }
        None => {
            if let Some(id) = first_duplicate(&submitted) {
                return Err(CoreError::Validation(format!(
                    "campsite {id} is listed more than once"
                ))
                .into());
            }
            let created = state.favorites.create(user.user_id, &submitted).await?;
            tracing::info!(
                user_id = user.user_id,
                added = submitted.len(),
                "Favorites record created",
            );
            created
        }
    };

    Ok(data(favorite))
}

/// PUT /api/v1/favorites
pub async fn replace_all(_user: AuthUser) -> AppResult<Response> {
    Err(CoreError::unsupported("PUT", "/favorites").into())
}

/// DELETE /api/v1/favorites
///
/// Remove the caller's whole record and return it.
pub async fn delete_all(user: AuthUser, State(state): State<AppState>) -> AppResult<Response> {
    match state.favorites.delete_by_user(user.user_id).await? {
        Some(favorite) => {
            tracing::info!(
                user_id = user.user_id,
                favorite_id = favorite.id,
                "Favorites record deleted",
            );
            Ok(data(favorite))
        }
        None => Ok(notice(FavoriteNotice::NoneToDelete)),
    }
}

// ---------------------------------------------------------------------------
// Item: /favorites/{campsite_id}
// ---------------------------------------------------------------------------

/// GET /api/v1/favorites/{campsite_id}
pub async fn get_one(_user: AuthUser, Path(campsite_id): Path<String>) -> AppResult<Response> {
    Err(CoreError::unsupported("GET", &format!("/favorites/{campsite_id}")).into())
}

/// POST /api/v1/favorites/{campsite_id}
///
/// Add one campsite after confirming it exists in the catalog.
pub async fn add_one(
    user: AuthUser,
    State(state): State<AppState>,
    Path(campsite_id): Path<DbId>,
) -> AppResult<Response> {
    let (favorite, campsite) = tokio::try_join!(
        state.favorites.find_by_user(user.user_id),
        state.catalog.find_by_id(campsite_id),
    )?;

    // Existence first: a stale id still in the list must not report success.
    let Some(campsite) = campsite else {
        return Ok(notice(FavoriteNotice::InvalidCampsite { campsite_id }));
    };

    let favorite = match favorite {
        Some(mut favorite) => {
            if !add_campsite(&mut favorite.campsite_ids, campsite_id) {
                return Ok(notice(FavoriteNotice::AlreadyFavorite {
                    name: campsite.name,
                    campsite_id,
                }));
            }
            state
                .favorites
                .save_campsites(favorite.id, &favorite.campsite_ids)
                .await?
        }
        None => state.favorites.create(user.user_id, &[campsite_id]).await?,
    };

    tracing::info!(
        user_id = user.user_id,
        campsite_id,
        campsite = %campsite.name,
        "Campsite added to favorites",
    );

    Ok(data(favorite))
}

/// PUT /api/v1/favorites/{campsite_id}
pub async fn replace_one(_user: AuthUser, Path(campsite_id): Path<String>) -> AppResult<Response> {
    Err(CoreError::unsupported("PUT", &format!("/favorites/{campsite_id}")).into())
}

/// DELETE /api/v1/favorites/{campsite_id}
///
/// Remove one campsite. Removing the last one keeps the (now empty) record.
pub async fn remove_one(
    user: AuthUser,
    State(state): State<AppState>,
    Path(campsite_id): Path<DbId>,
) -> AppResult<Response> {
    let no_favorites = FavoriteNotice::NoFavorites {
        user_id: user.user_id,
    };

    let Some(mut favorite) = state.favorites.find_by_user(user.user_id).await? else {
        return Ok(notice(no_favorites));
    };

    match remove_campsite(&mut favorite.campsite_ids, campsite_id) {
        Removal::Removed => {
            let saved = state
                .favorites
                .save_campsites(favorite.id, &favorite.campsite_ids)
                .await?;
            tracing::info!(
                user_id = user.user_id,
                campsite_id,
                remaining = saved.campsite_ids.len(),
                "Campsite removed from favorites",
            );
            Ok(data(saved))
        }
        Removal::NotInList => Ok(notice(FavoriteNotice::NotInList { campsite_id })),
        Removal::Empty => Ok(notice(no_favorites)),
    }
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// OPTIONS on either path. Cross-origin preflights are answered by the CORS
/// layer before reaching this.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Resolve the owner and campsites of a record.
async fn expand(state: &AppState, favorite: Favorite) -> Result<FavoriteDetail, AppError> {
    let (owner, campsites) = tokio::try_join!(
        state.users.find_by_id(favorite.user_id),
        state.catalog.find_many(&favorite.campsite_ids),
    )?;
    Ok(FavoriteDetail::expand(favorite, owner, campsites))
}
