//! Repository for the `services` table.

use goldleaf_core::slug::slug_or_title;
use goldleaf_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, UpdateService};

const COLUMNS: &str = "id, title, slug, short_description, full_description, hero_image_url, \
                        icon, hero_tag, hero_meta_projects, hero_meta_satisfaction, \
                        hero_meta_guarantee, cta_text, cta_link, stats_strip_data, \
                        overview_content, whats_included, timeline_data, process_steps_data, \
                        showcase_projects_data, specs_data, faq_data, testimonial_text, \
                        testimonial_author, testimonial_role, related_services, featured, \
                        sort_order, created_at, updated_at";

/// Default listing order.
const ORDER_BY: &str = "ORDER BY sort_order, title";

/// Provides CRUD and listing queries for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, deriving the slug from the title when blank.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let slug = slug_or_title(input.slug.as_deref(), &input.title);
        let query = format!(
            "INSERT INTO services (title, slug, short_description, full_description, hero_image_url, icon,
                                   hero_tag, hero_meta_projects, hero_meta_satisfaction,
                                   hero_meta_guarantee, cta_text, cta_link, stats_strip_data,
                                   overview_content, whats_included, timeline_data, process_steps_data,
                                   showcase_projects_data, specs_data, faq_data, testimonial_text,
                                   testimonial_author, testimonial_role, related_services, featured,
                                   sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, ''),
                      COALESCE($6, ''), COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, ''),
                      COALESCE($10, ''), COALESCE($11, ''), COALESCE($12, ''),
                      COALESCE($13, ''), COALESCE($14, ''), COALESCE($15, ''),
                      COALESCE($16, ''), COALESCE($17, ''), COALESCE($18, ''),
                      COALESCE($19, ''), COALESCE($20, ''), COALESCE($21, ''),
                      COALESCE($22, ''), COALESCE($23, ''), COALESCE($24, ''),
                      COALESCE($25, false), COALESCE($26, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.hero_image_url)
            .bind(&input.icon)
            .bind(&input.hero_tag)
            .bind(&input.hero_meta_projects)
            .bind(&input.hero_meta_satisfaction)
            .bind(&input.hero_meta_guarantee)
            .bind(&input.cta_text)
            .bind(&input.cta_link)
            .bind(&input.stats_strip_data)
            .bind(&input.overview_content)
            .bind(&input.whats_included)
            .bind(&input.timeline_data)
            .bind(&input.process_steps_data)
            .bind(&input.showcase_projects_data)
            .bind(&input.specs_data)
            .bind(&input.faq_data)
            .bind(&input.testimonial_text)
            .bind(&input.testimonial_author)
            .bind(&input.testimonial_role)
            .bind(&input.related_services)
            .bind(input.featured)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE slug = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// All services in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services {ORDER_BY}");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// The first `limit` services in display order.
    pub async fn list_first(pool: &PgPool, limit: i64) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services {ORDER_BY} LIMIT $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Featured services in display order, optionally capped.
    pub async fn list_featured(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE featured {ORDER_BY} LIMIT $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Featured services other than `exclude_id`.
    pub async fn list_featured_excluding(
        pool: &PgPool,
        exclude_id: DbId,
        limit: i64,
    ) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services
             WHERE featured AND id <> $1
             {ORDER_BY}
             LIMIT $2"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(exclude_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Services whose slug is in `slugs`, other than `exclude_id`.
    pub async fn list_by_slugs(
        pool: &PgPool,
        slugs: &[String],
        exclude_id: DbId,
        limit: i64,
    ) -> Result<Vec<Service>, sqlx::Error> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM services
             WHERE slug = ANY($1) AND id <> $2
             {ORDER_BY}
             LIMIT $3"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(slugs)
            .bind(exclude_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM services")
            .fetch_one(pool)
            .await?;
        Ok(n)
    }

    /// Update a service. Only non-`None` fields in `input` are applied and a
    /// blank slug keeps the current one.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                title = COALESCE($2, title),
                slug = COALESCE(NULLIF(TRIM($3), ''), slug),
                short_description = COALESCE($4, short_description),
                full_description = COALESCE($5, full_description),
                hero_image_url = COALESCE($6, hero_image_url),
                icon = COALESCE($7, icon),
                hero_tag = COALESCE($8, hero_tag),
                hero_meta_projects = COALESCE($9, hero_meta_projects),
                hero_meta_satisfaction = COALESCE($10, hero_meta_satisfaction),
                hero_meta_guarantee = COALESCE($11, hero_meta_guarantee),
                cta_text = COALESCE($12, cta_text),
                cta_link = COALESCE($13, cta_link),
                stats_strip_data = COALESCE($14, stats_strip_data),
                overview_content = COALESCE($15, overview_content),
                whats_included = COALESCE($16, whats_included),
                timeline_data = COALESCE($17, timeline_data),
                process_steps_data = COALESCE($18, process_steps_data),
                showcase_projects_data = COALESCE($19, showcase_projects_data),
                specs_data = COALESCE($20, specs_data),
                faq_data = COALESCE($21, faq_data),
                testimonial_text = COALESCE($22, testimonial_text),
                testimonial_author = COALESCE($23, testimonial_author),
                testimonial_role = COALESCE($24, testimonial_role),
                related_services = COALESCE($25, related_services),
                featured = COALESCE($26, featured),
                sort_order = COALESCE($27, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.hero_image_url)
            .bind(&input.icon)
            .bind(&input.hero_tag)
            .bind(&input.hero_meta_projects)
            .bind(&input.hero_meta_satisfaction)
            .bind(&input.hero_meta_guarantee)
            .bind(&input.cta_text)
            .bind(&input.cta_link)
            .bind(&input.stats_strip_data)
            .bind(&input.overview_content)
            .bind(&input.whats_included)
            .bind(&input.timeline_data)
            .bind(&input.process_steps_data)
            .bind(&input.showcase_projects_data)
            .bind(&input.specs_data)
            .bind(&input.faq_data)
            .bind(&input.testimonial_text)
            .bind(&input.testimonial_author)
            .bind(&input.testimonial_role)
            .bind(&input.related_services)
            .bind(input.featured)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
