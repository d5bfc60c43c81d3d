//! Repository for the `page_metadata` table.

use goldleaf_core::pages::PAGE_HOME;
use goldleaf_core::types::DbId;
use sqlx::PgPool;

use crate::models::page_metadata::{CreatePageMetadata, PageMetadata, UpdatePageMetadata};

const COLUMNS: &str = "id, page, custom_slug, title, description, keywords, og_image_url, \
                        created_at, updated_at";

pub struct PageMetadataRepo;

impl PageMetadataRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePageMetadata,
    ) -> Result<PageMetadata, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_metadata (page, custom_slug, title, description, keywords, og_image_url)
             VALUES (COALESCE($1, '{PAGE_HOME}'), COALESCE($2, ''), $3,
                     COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageMetadata>(&query)
            .bind(&input.page)
            .bind(&input.custom_slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.keywords)
            .bind(&input.og_image_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PageMetadata>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM page_metadata WHERE id = $1");
        sqlx::query_as::<_, PageMetadata>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up the metadata of a page. Fixed pages use an empty `custom_slug`.
    pub async fn find_for_page(
        pool: &PgPool,
        page: &str,
        custom_slug: &str,
    ) -> Result<Option<PageMetadata>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_metadata WHERE page = $1 AND custom_slug = $2"
        );
        sqlx::query_as::<_, PageMetadata>(&query)
            .bind(page)
            .bind(custom_slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PageMetadata>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM page_metadata ORDER BY page, custom_slug");
        sqlx::query_as::<_, PageMetadata>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePageMetadata,
    ) -> Result<Option<PageMetadata>, sqlx::Error> {
        let query = format!(
            "UPDATE page_metadata SET
                page = COALESCE($2, page),
                custom_slug = COALESCE($3, custom_slug),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                keywords = COALESCE($6, keywords),
                og_image_url = COALESCE($7, og_image_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageMetadata>(&query)
            .bind(id)
            .bind(&input.page)
            .bind(&input.custom_slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.keywords)
            .bind(&input.og_image_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM page_metadata WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
