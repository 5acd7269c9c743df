use campsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::UserSummary;

pub struct UserRepo;

impl UserRepo {
    /// Look up the public fields of a user.
    pub async fn find_summary(pool: &PgPool, id: DbId) -> Result<Option<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT id, username, first_name, last_name, admin FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
