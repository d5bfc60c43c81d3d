//! Repository for the `intro_settings` singleton.

use sqlx::PgPool;

use crate::models::intro_settings::{IntroSettings, UpdateIntroSettings};

const COLUMNS: &str = "id, intro_image_url, use_svg_fallback, created_at, updated_at";

pub struct IntroSettingsRepo;

impl IntroSettingsRepo {
    /// Read the settings row, creating it with defaults if missing.
    pub async fn get(pool: &PgPool) -> Result<IntroSettings, sqlx::Error> {
        sqlx::query("INSERT INTO intro_settings (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
            .execute(pool)
            .await?;
        let query = format!("SELECT {COLUMNS} FROM intro_settings WHERE id = 1");
        sqlx::query_as::<_, IntroSettings>(&query)
            .fetch_one(pool)
            .await
    }

    /// Apply the non-`None` fields of `input`, creating the row if missing.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateIntroSettings,
    ) -> Result<IntroSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO intro_settings (id, intro_image_url, use_svg_fallback)
             VALUES (1, COALESCE($1, ''), COALESCE($2, true))
             ON CONFLICT (id) DO UPDATE SET
                intro_image_url = COALESCE($1, intro_settings.intro_image_url),
                use_svg_fallback = COALESCE($2, intro_settings.use_svg_fallback)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IntroSettings>(&query)
            .bind(&input.intro_image_url)
            .bind(input.use_svg_fallback)
            .fetch_one(pool)
            .await
    }
}
