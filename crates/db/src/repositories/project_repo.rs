//! Repository for the `projects` table.

use goldleaf_core::slug::slug_or_title;
use goldleaf_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

const COLUMNS: &str = "id, title, slug, location, category, hero_image_url, short_description, \
                        full_description, specs_data, gallery_images, related_service_id, \
                        featured, sort_order, created_at, updated_at";

/// Portfolio order: featured first, then display order, newest first.
const ORDER_BY: &str = "ORDER BY featured DESC, sort_order, created_at DESC";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, deriving the slug from the title when blank.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let slug = slug_or_title(input.slug.as_deref(), &input.title);
        let query = format!(
            "INSERT INTO projects (title, slug, location, category, hero_image_url,
                                   short_description, full_description, specs_data,
                                   gallery_images, related_service_id, featured, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, ''), COALESCE($6, ''), COALESCE($7, ''),
                     COALESCE($8, ''), COALESCE($9, ''), $10,
                     COALESCE($11, false), COALESCE($12, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.location)
            .bind(&input.category)
            .bind(&input.hero_image_url)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.specs_data)
            .bind(&input.gallery_images)
            .bind(input.related_service_id)
            .bind(input.featured)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// All projects in portfolio order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects {ORDER_BY}");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Featured projects by display order, newest first within an order.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE featured
             ORDER BY sort_order, created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Distinct non-empty categories, alphabetically.
    pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT category FROM projects WHERE category <> '' ORDER BY category",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(c,)| c).collect())
    }

    /// Random projects other than `exclude_id`: featured ones first, topped
    /// up with non-featured ones.
    pub async fn list_related(
        pool: &PgPool,
        exclude_id: DbId,
        limit: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE id <> $1
             ORDER BY featured DESC, random()
             LIMIT $2"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(exclude_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a project. A blank slug keeps the current one; an explicit
    /// `null` related service clears the link.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                slug = COALESCE(NULLIF(TRIM($3), ''), slug),
                location = COALESCE($4, location),
                category = COALESCE($5, category),
                hero_image_url = COALESCE($6, hero_image_url),
                short_description = COALESCE($7, short_description),
                full_description = COALESCE($8, full_description),
                specs_data = COALESCE($9, specs_data),
                gallery_images = COALESCE($10, gallery_images),
                related_service_id = CASE WHEN $11 THEN $12 ELSE related_service_id END,
                featured = COALESCE($13, featured),
                sort_order = COALESCE($14, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.location)
            .bind(&input.category)
            .bind(&input.hero_image_url)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.specs_data)
            .bind(&input.gallery_images)
            .bind(input.related_service_id.is_some())
            .bind(input.related_service_id.flatten())
            .bind(input.featured)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
