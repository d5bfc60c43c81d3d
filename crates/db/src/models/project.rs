//! Portfolio projects.

use goldleaf_core::types::{DbId, SortOrder, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub location: String,
    pub category: String,
    pub hero_image_url: String,
    pub short_description: String,
    pub full_description: String,
    /// `key|value` records.
    pub specs_data: String,
    /// Comma-separated image URLs.
    pub gallery_images: String,
    pub related_service_id: Option<DbId>,
    pub featured: bool,
    pub sort_order: SortOrder,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. A blank `slug` is derived from the title.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: Option<String>,
    pub location: String,
    pub category: String,
    pub hero_image_url: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub specs_data: Option<String>,
    pub gallery_images: Option<String>,
    pub related_service_id: Option<DbId>,
    pub featured: Option<bool>,
    pub sort_order: Option<SortOrder>,
}

/// DTO for updating a project.
///
/// `related_service_id` distinguishes an absent field (keep) from an
/// explicit `null` (clear).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub hero_image_url: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub specs_data: Option<String>,
    pub gallery_images: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub related_service_id: Option<Option<DbId>>,
    pub featured: Option<bool>,
    pub sort_order: Option<SortOrder>,
}

/// Wrap a present (possibly `null`) field in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
