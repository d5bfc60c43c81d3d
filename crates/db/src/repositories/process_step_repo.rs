//! Repository for the `process_steps` table.

use goldleaf_core::types::DbId;
use sqlx::PgPool;

use crate::models::process_step::{CreateProcessStep, ProcessStep, UpdateProcessStep};

const COLUMNS: &str = "id, icon, title, description, sort_order, active, created_at, updated_at";

pub struct ProcessStepRepo;

impl ProcessStepRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProcessStep,
    ) -> Result<ProcessStep, sqlx::Error> {
        let query = format!(
            "INSERT INTO process_steps (icon, title, description, sort_order, active)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(&input.icon)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProcessStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM process_steps WHERE id = $1");
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ProcessStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM process_steps ORDER BY sort_order, title");
        sqlx::query_as::<_, ProcessStep>(&query).fetch_all(pool).await
    }

    /// Active steps in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<ProcessStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM process_steps WHERE active ORDER BY sort_order, title"
        );
        sqlx::query_as::<_, ProcessStep>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProcessStep,
    ) -> Result<Option<ProcessStep>, sqlx::Error> {
        let query = format!(
            "UPDATE process_steps SET
                icon = COALESCE($2, icon),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                sort_order = COALESCE($5, sort_order),
                active = COALESCE($6, active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(id)
            .bind(&input.icon)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM process_steps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
