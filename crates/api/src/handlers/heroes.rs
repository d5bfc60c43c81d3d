//! Handlers for `/dashboard/heroes` (admin only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use goldleaf_core::error::CoreError;
use goldleaf_core::fields::{lint_records, RecordShape};
use goldleaf_core::pages::{validate_custom_slug, validate_hero_page, PAGE_HOME};
use goldleaf_core::types::DbId;
use goldleaf_core::validation::{optional_non_blank, require_non_blank};
use goldleaf_db::models::hero::{CreateHero, Hero, UpdateHero};
use goldleaf_db::repositories::HeroRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, WithWarnings};
use crate::state::AppState;

fn saved(hero: Hero) -> WithWarnings<Hero> {
    WithWarnings {
        warnings: lint_records("stats_data", &hero.stats_data, RecordShape::PAIR),
        data: hero,
    }
}

fn hero_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Hero", id })
}

/// GET /api/v1/dashboard/heroes
///
/// Ordered by page, then display order.
pub async fn list_heroes(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Hero>>>> {
    let heroes = HeroRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: heroes }))
}

/// POST /api/v1/dashboard/heroes
pub async fn create_hero(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateHero>,
) -> AppResult<(StatusCode, Json<WithWarnings<Hero>>)> {
    require_non_blank("title", &input.title)?;
    let page = input.page.as_deref().unwrap_or(PAGE_HOME);
    validate_hero_page(page)?;
    validate_custom_slug(page, input.custom_slug.as_deref().unwrap_or_default())?;

    let hero = HeroRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = admin.user_id, hero_id = hero.id, page = %hero.page, "Hero created");
    Ok((StatusCode::CREATED, Json(saved(hero))))
}

/// GET /api/v1/dashboard/heroes/{id}
pub async fn get_hero(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<WithWarnings<Hero>>> {
    let hero = HeroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| hero_not_found(id))?;
    Ok(Json(saved(hero)))
}

/// PUT /api/v1/dashboard/heroes/{id}
pub async fn update_hero(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHero>,
) -> AppResult<Json<WithWarnings<Hero>>> {
    optional_non_blank("title", input.title.as_deref())?;
    if let Some(page) = input.page.as_deref() {
        validate_hero_page(page)?;
    }

    let existing = HeroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| hero_not_found(id))?;
    validate_custom_slug(
        input.page.as_deref().unwrap_or(&existing.page),
        input.custom_slug.as_deref().unwrap_or(&existing.custom_slug),
    )?;

    let hero = HeroRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| hero_not_found(id))?;
    tracing::info!(user_id = admin.user_id, hero_id = id, "Hero updated");
    Ok(Json(saved(hero)))
}

/// DELETE /api/v1/dashboard/heroes/{id}
pub async fn delete_hero(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !HeroRepo::delete(&state.pool, id).await? {
        return Err(hero_not_found(id));
    }
    tracing::info!(user_id = admin.user_id, hero_id = id, "Hero deleted");
    Ok(StatusCode::NO_CONTENT)
}
