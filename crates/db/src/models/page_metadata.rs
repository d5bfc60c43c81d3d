//! SEO metadata per page.

use goldleaf_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `page_metadata` table. Unique per `(page, custom_slug)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageMetadata {
    pub id: DbId,
    pub page: String,
    pub custom_slug: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreatePageMetadata {
    pub page: Option<String>,
    pub custom_slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePageMetadata {
    pub page: Option<String>,
    pub custom_slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image_url: Option<String>,
}
