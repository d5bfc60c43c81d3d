//! Home page intro section settings (singleton).

use goldleaf_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `intro_settings` table (`id = 1`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IntroSettings {
    pub id: DbId,
    pub intro_image_url: String,
    /// Show the built-in illustration when no image URL is set.
    pub use_svg_fallback: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateIntroSettings {
    pub intro_image_url: Option<String>,
    pub use_svg_fallback: Option<bool>,
}
