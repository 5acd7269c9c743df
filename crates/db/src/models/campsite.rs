//! Campsite catalog rows. Read-only from the favorites service.

use campsite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `campsites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campsite {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub elevation: i32,
    pub cost: i32,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
