//! Favorites records and the bulk-add payload.

use campsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::campsite::Campsite;
use crate::models::user::UserSummary;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `favorites` table. At most one per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub campsite_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A favorites record with its owner and campsites resolved.
///
/// `campsites` follows the order of `campsite_ids`; ids whose campsite has
/// since been removed from the catalog are left out.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteDetail {
    pub id: DbId,
    pub user: Option<UserSummary>,
    pub campsite_ids: Vec<DbId>,
    pub campsites: Vec<Campsite>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FavoriteDetail {
    pub fn expand(favorite: Favorite, user: Option<UserSummary>, campsites: Vec<Campsite>) -> Self {
        Self {
            id: favorite.id,
            user,
            campsite_ids: favorite.campsite_ids,
            campsites,
            created_at: favorite.created_at,
            updated_at: favorite.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// One element of a bulk-add body.
///
/// Clients send either a bare id or an object carrying the id, e.g. a full
/// campsite as returned by the catalog (`{"_id": 3, "name": ...}`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CampsiteRef {
    Id(DbId),
    Object {
        #[serde(rename = "_id", alias = "id")]
        id: DbId,
    },
}

impl CampsiteRef {
    pub fn id(&self) -> DbId {
        match *self {
            CampsiteRef::Id(id) | CampsiteRef::Object { id } => id,
        }
    }
}

/// Body of `POST /favorites`: a JSON array of [`CampsiteRef`].
///
/// Repeated ids are allowed here; whether they are an error depends on
/// whether the caller already has a record.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(transparent)]
pub struct AddFavorites {
    #[validate(length(min = 1, message = "at least one campsite id is required"))]
    pub campsites: Vec<CampsiteRef>,
}

impl AddFavorites {
    /// Submitted ids in request order.
    pub fn campsite_ids(&self) -> Vec<DbId> {
        self.campsites.iter().map(CampsiteRef::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> AddFavorites {
        serde_json::from_value(json).expect("payload should deserialize")
    }

    #[test]
    fn accepts_bare_ids_and_objects() {
        let payload = parse(serde_json::json!([1, {"_id": 2}, {"id": 3, "name": "Chrome River"}]));
        assert_eq!(payload.campsite_ids(), vec![1, 2, 3]);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_empty_list() {
        let payload = parse(serde_json::json!([]));
        let errors = payload.validate().unwrap_err();
        assert!(errors.to_string().contains("at least one campsite id is required"));
    }

    #[test]
    fn repeated_ids_pass_payload_validation() {
        let payload = parse(serde_json::json!([4, {"_id": 4}]));
        assert!(payload.validate().is_ok());
        assert_eq!(payload.campsite_ids(), vec![4, 4]);
    }

    #[test]
    fn non_array_body_does_not_deserialize() {
        let result = serde_json::from_value::<AddFavorites>(serde_json::json!({"campsites": [1]}));
        assert!(result.is_err());
    }
}
