//! Gallery albums and uploaded image assets.

use goldleaf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `media_albums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaAlbum {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Folder on the media host that uploads into this album land in.
    pub cld_folder: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `media_assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaAsset {
    pub id: DbId,
    pub album_id: Option<DbId>,
    pub title: String,
    pub public_id: String,
    /// Original delivery URL.
    pub secure_url: String,
    /// Auto-format, auto-quality variant.
    pub web_url: String,
    /// Face-aware 480x320 crop.
    pub thumb_url: String,
    pub bytes_size: i64,
    pub width: i32,
    pub height: i32,
    pub format: String,
    pub tags_csv: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording an uploaded asset.
#[derive(Debug, Clone, Default)]
pub struct CreateMediaAsset {
    pub album_id: Option<DbId>,
    pub title: String,
    pub public_id: String,
    pub secure_url: String,
    pub web_url: String,
    pub thumb_url: String,
    pub bytes_size: i64,
    pub width: i32,
    pub height: i32,
    pub format: String,
    pub tags_csv: String,
}
