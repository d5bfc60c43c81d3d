//! Per-user dashboard role.

use goldleaf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_profiles` table. At most one per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub user_id: DbId,
    /// One of `admin`, `blog_author`, `user`.
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
