//! Repository for the `media_albums` table.

use sqlx::PgPool;

use crate::models::media::MediaAlbum;

const COLUMNS: &str = "id, title, description, cld_folder, created_at, updated_at";

pub struct MediaAlbumRepo;

impl MediaAlbumRepo {
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<MediaAlbum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_albums WHERE title = $1");
        sqlx::query_as::<_, MediaAlbum>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the album with `title`, creating it with `cld_folder` if absent.
    ///
    /// An existing album keeps its folder.
    pub async fn get_or_create(
        pool: &PgPool,
        title: &str,
        cld_folder: &str,
    ) -> Result<MediaAlbum, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_albums (title, cld_folder)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_media_albums_title DO NOTHING
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, MediaAlbum>(&query)
            .bind(title)
            .bind(cld_folder)
            .fetch_optional(pool)
            .await?;

        match created {
            Some(album) => Ok(album),
            None => Self::find_by_title(pool, title)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }
}
