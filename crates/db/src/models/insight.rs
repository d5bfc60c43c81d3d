//! Blog posts ("insights").

use goldleaf_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `insights` table joined with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Insight {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Editor.js JSON, or raw HTML for posts written before the block editor.
    pub content: String,
    pub featured_image_url: String,
    pub author_id: Option<DbId>,
    pub author_username: Option<String>,
    /// `draft` or `published`.
    pub status: String,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an insight.
///
/// `author_id` and `published_at` are set by the server, never by the client.
#[derive(Debug, Default, Deserialize)]
pub struct CreateInsight {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image_url: Option<String>,
    pub status: Option<String>,
    #[serde(skip_deserializing)]
    pub author_id: Option<DbId>,
    #[serde(skip_deserializing)]
    pub published_at: Option<Timestamp>,
}

/// DTO for updating an insight. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateInsight {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image_url: Option<String>,
    pub status: Option<String>,
}

/// Counts shown above the dashboard insight list.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct InsightStats {
    pub total: i64,
    pub published: i64,
    pub draft: i64,
    pub this_month: i64,
}
