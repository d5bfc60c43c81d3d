//! Repository for the `heroes` table.

use goldleaf_core::pages::PAGE_HOME;
use goldleaf_core::types::DbId;
use sqlx::PgPool;

use crate::models::hero::{CreateHero, Hero, UpdateHero};

const COLUMNS: &str = "id, page, custom_slug, eyebrow, title, subtitle, background_image_url, \
                        cta_text, cta_link, secondary_cta_text, secondary_cta_link, stats_data, \
                        active, sort_order, created_at, updated_at";

pub struct HeroRepo;

impl HeroRepo {
    pub async fn create(pool: &PgPool, input: &CreateHero) -> Result<Hero, sqlx::Error> {
        let query = format!(
            "INSERT INTO heroes (page, custom_slug, eyebrow, title, subtitle, background_image_url,
                                 cta_text, cta_link, secondary_cta_text, secondary_cta_link,
                                 stats_data, active, sort_order)
             VALUES (COALESCE($1, '{PAGE_HOME}'), COALESCE($2, ''), COALESCE($3, ''), $4,
                     COALESCE($5, ''), COALESCE($6, ''), COALESCE($7, ''), COALESCE($8, ''),
                     COALESCE($9, ''), COALESCE($10, ''), COALESCE($11, ''),
                     COALESCE($12, true), COALESCE($13, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(&input.page)
            .bind(&input.custom_slug)
            .bind(&input.eyebrow)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.background_image_url)
            .bind(&input.cta_text)
            .bind(&input.cta_link)
            .bind(&input.secondary_cta_text)
            .bind(&input.secondary_cta_link)
            .bind(&input.stats_data)
            .bind(input.active)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM heroes WHERE id = $1");
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The active hero of a page with the lowest display order.
    pub async fn find_active_for_page(
        pool: &PgPool,
        page: &str,
    ) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM heroes
             WHERE page = $1 AND active
             ORDER BY sort_order, id
             LIMIT 1"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(page)
            .fetch_optional(pool)
            .await
    }

    /// All heroes ordered by page, then display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM heroes ORDER BY page, sort_order");
        sqlx::query_as::<_, Hero>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM heroes")
            .fetch_one(pool)
            .await?;
        Ok(n)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHero,
    ) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!(
            "UPDATE heroes SET
                page = COALESCE($2, page),
                custom_slug = COALESCE($3, custom_slug),
                eyebrow = COALESCE($4, eyebrow),
                title = COALESCE($5, title),
                subtitle = COALESCE($6, subtitle),
                background_image_url = COALESCE($7, background_image_url),
                cta_text = COALESCE($8, cta_text),
                cta_link = COALESCE($9, cta_link),
                secondary_cta_text = COALESCE($10, secondary_cta_text),
                secondary_cta_link = COALESCE($11, secondary_cta_link),
                stats_data = COALESCE($12, stats_data),
                active = COALESCE($13, active),
                sort_order = COALESCE($14, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .bind(&input.page)
            .bind(&input.custom_slug)
            .bind(&input.eyebrow)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.background_image_url)
            .bind(&input.cta_text)
            .bind(&input.cta_link)
            .bind(&input.secondary_cta_text)
            .bind(&input.secondary_cta_link)
            .bind(&input.stats_data)
            .bind(input.active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
