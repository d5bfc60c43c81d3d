//! Repository for the `insights` table.
//!
//! Every query joins `users` so rows carry the author's username. Writes
//! go through a data-modifying CTE for the same reason.

use goldleaf_core::pages::{STATUS_DRAFT, STATUS_PUBLISHED};
use goldleaf_core::slug::slug_or_title;
use goldleaf_core::types::DbId;
use sqlx::PgPool;

use crate::models::insight::{CreateInsight, Insight, InsightStats, UpdateInsight};

const COLUMNS: &str = "i.id, i.title, i.slug, i.excerpt, i.content, i.featured_image_url, \
                        i.author_id, u.username AS author_username, i.status, i.published_at, \
                        i.created_at, i.updated_at";

const AUTHOR_JOIN: &str = "LEFT JOIN users u ON u.id = i.author_id";

/// Public order: newest publication first.
const PUBLISHED_ORDER: &str = "ORDER BY i.published_at DESC NULLS LAST, i.created_at DESC";

/// Dashboard filter for [`InsightRepo::list_for_dashboard`] and [`InsightRepo::stats`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightFilter<'a> {
    /// Restrict to one author's posts.
    pub author_id: Option<DbId>,
    /// Restrict to one status.
    pub status: Option<&'a str>,
}

/// Provides CRUD and listing queries for insights.
pub struct InsightRepo;

impl InsightRepo {
    /// Insert a new insight, deriving the slug from the title when blank.
    pub async fn create(pool: &PgPool, input: &CreateInsight) -> Result<Insight, sqlx::Error> {
        let slug = slug_or_title(input.slug.as_deref(), &input.title);
        let query = format!(
            "WITH i AS (
                INSERT INTO insights (title, slug, excerpt, content, featured_image_url,
                                      author_id, status, published_at)
                VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, ''),
                        $6, COALESCE($7, '{STATUS_DRAFT}'), $8)
                RETURNING *
             )
             SELECT {COLUMNS} FROM i {AUTHOR_JOIN}"
        );
        sqlx::query_as::<_, Insight>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.featured_image_url)
            .bind(input.author_id)
            .bind(&input.status)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Insight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM insights i {AUTHOR_JOIN} WHERE i.id = $1");
        sqlx::query_as::<_, Insight>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published insight by slug. Drafts are never returned.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Insight>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM insights i {AUTHOR_JOIN}
             WHERE i.slug = $1 AND i.status = '{STATUS_PUBLISHED}'"
        );
        sqlx::query_as::<_, Insight>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (n,): (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM insights WHERE status = '{STATUS_PUBLISHED}'"
        ))
        .fetch_one(pool)
        .await?;
        Ok(n)
    }

    /// One page of published insights, newest first.
    pub async fn list_published(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Insight>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM insights i {AUTHOR_JOIN}
             WHERE i.status = '{STATUS_PUBLISHED}'
             {PUBLISHED_ORDER}
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Insight>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// The most recent published insights other than `exclude_id`.
    pub async fn list_recent_published_excluding(
        pool: &PgPool,
        exclude_id: DbId,
        limit: i64,
    ) -> Result<Vec<Insight>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM insights i {AUTHOR_JOIN}
             WHERE i.status = '{STATUS_PUBLISHED}' AND i.id <> $1
             {PUBLISHED_ORDER}
             LIMIT $2"
        );
        sqlx::query_as::<_, Insight>(&query)
            .bind(exclude_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Dashboard listing, newest created first.
    pub async fn list_for_dashboard(
        pool: &PgPool,
        filter: InsightFilter<'_>,
    ) -> Result<Vec<Insight>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM insights i {AUTHOR_JOIN}
             WHERE ($1::BIGINT IS NULL OR i.author_id = $1)
               AND ($2::TEXT IS NULL OR i.status = $2)
             ORDER BY i.created_at DESC"
        );
        sqlx::query_as::<_, Insight>(&query)
            .bind(filter.author_id)
            .bind(filter.status)
            .fetch_all(pool)
            .await
    }

    /// Counts for the dashboard header over the posts `filter` selects.
    ///
    /// "This month" counts posts created since the start of the current
    /// calendar month in the database's time zone.
    pub async fn stats(
        pool: &PgPool,
        filter: InsightFilter<'_>,
    ) -> Result<InsightStats, sqlx::Error> {
        sqlx::query_as::<_, InsightStats>(&format!(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE status = '{STATUS_PUBLISHED}') AS published,
                    COUNT(*) FILTER (WHERE status = '{STATUS_DRAFT}') AS draft,
                    COUNT(*) FILTER (WHERE created_at >= date_trunc('month', NOW())) AS this_month
             FROM insights
             WHERE ($1::BIGINT IS NULL OR author_id = $1)
               AND ($2::TEXT IS NULL OR status = $2)"
        ))
        .bind(filter.author_id)
        .bind(filter.status)
        .fetch_one(pool)
        .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM insights")
            .fetch_one(pool)
            .await?;
        Ok(n)
    }

    /// Update an insight. Only non-`None` fields in `input` are applied and
    /// a blank slug keeps the current one. When `stamp_published` is set,
    /// `published_at` becomes now.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInsight,
        stamp_published: bool,
    ) -> Result<Option<Insight>, sqlx::Error> {
        let query = format!(
            "WITH i AS (
                UPDATE insights SET
                    title = COALESCE($2, title),
                    slug = COALESCE(NULLIF(TRIM($3), ''), slug),
                    excerpt = COALESCE($4, excerpt),
                    content = COALESCE($5, content),
                    featured_image_url = COALESCE($6, featured_image_url),
                    status = COALESCE($7, status),
                    published_at = CASE WHEN $8 THEN NOW() ELSE published_at END
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM i {AUTHOR_JOIN}"
        );
        sqlx::query_as::<_, Insight>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.featured_image_url)
            .bind(&input.status)
            .bind(stamp_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete an insight. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM insights WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
