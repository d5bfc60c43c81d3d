//! Repository for the `media_assets` table.

use goldleaf_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::{CreateMediaAsset, MediaAsset};

const COLUMNS: &str = "id, album_id, title, public_id, secure_url, web_url, thumb_url, \
                        bytes_size, width, height, format, tags_csv, created_at, updated_at";

pub struct MediaAssetRepo;

impl MediaAssetRepo {
    pub async fn create(pool: &PgPool, input: &CreateMediaAsset) -> Result<MediaAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_assets (album_id, title, public_id, secure_url, web_url, thumb_url,
                                       bytes_size, width, height, format, tags_csv)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(input.album_id)
            .bind(&input.title)
            .bind(&input.public_id)
            .bind(&input.secure_url)
            .bind(&input.web_url)
            .bind(&input.thumb_url)
            .bind(input.bytes_size)
            .bind(input.width)
            .bind(input.height)
            .bind(&input.format)
            .bind(&input.tags_csv)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_assets WHERE id = $1");
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every asset, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MediaAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_assets ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, MediaAsset>(&query).fetch_all(pool).await
    }

    /// One page of assets, newest first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MediaAsset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media_assets
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media_assets")
            .fetch_one(pool)
            .await?;
        Ok(n)
    }

    /// Delete the asset row. The hosted file is left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media_assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
