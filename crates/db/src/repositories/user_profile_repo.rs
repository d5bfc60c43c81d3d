//! Repository for the `user_profiles` table.

use goldleaf_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_profile::UserProfile;

const COLUMNS: &str = "id, user_id, role, created_at, updated_at";

pub struct UserProfileRepo;

impl UserProfileRepo {
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Set a user's role, creating the profile if it does not exist yet.
    pub async fn set_role(
        pool: &PgPool,
        user_id: DbId,
        role: &str,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (user_id, role)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_user_profiles_user_id
             DO UPDATE SET role = EXCLUDED.role
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(role)
            .fetch_one(pool)
            .await
    }
}
