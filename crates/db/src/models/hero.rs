//! Page hero banners.

use goldleaf_core::types::{DbId, SortOrder, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `heroes` table. Unique per `(page, custom_slug)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hero {
    pub id: DbId,
    pub page: String,
    pub custom_slug: String,
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub background_image_url: String,
    pub cta_text: String,
    pub cta_link: String,
    pub secondary_cta_text: String,
    pub secondary_cta_link: String,
    /// `number|label` records.
    pub stats_data: String,
    pub active: bool,
    pub sort_order: SortOrder,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a hero.
#[derive(Debug, Default, Deserialize)]
pub struct CreateHero {
    pub page: Option<String>,
    pub custom_slug: Option<String>,
    pub eyebrow: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub background_image_url: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_link: Option<String>,
    pub stats_data: Option<String>,
    pub active: Option<bool>,
    pub sort_order: Option<SortOrder>,
}

/// DTO for updating a hero. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateHero {
    pub page: Option<String>,
    pub custom_slug: Option<String>,
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub background_image_url: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_link: Option<String>,
    pub stats_data: Option<String>,
    pub active: Option<bool>,
    pub sort_order: Option<SortOrder>,
}
