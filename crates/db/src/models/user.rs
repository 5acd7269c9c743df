use campsite_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Public projection of a `users` row, used when expanding a favorites record.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}
