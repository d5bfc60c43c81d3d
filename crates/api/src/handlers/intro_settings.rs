//! Handlers for `/dashboard/intro-settings` (admin only).
//!
//! The home page intro section has a single settings row, created with
//! defaults on first read.

use axum::extract::State;
use axum::Json;
use goldleaf_db::models::intro_settings::{IntroSettings, UpdateIntroSettings};
use goldleaf_db::repositories::IntroSettingsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/intro-settings
pub async fn get_intro_settings(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<IntroSettings>>> {
    let settings = IntroSettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/dashboard/intro-settings
pub async fn update_intro_settings(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<UpdateIntroSettings>,
) -> AppResult<Json<DataResponse<IntroSettings>>> {
    let settings = IntroSettingsRepo::update(&state.pool, &input).await?;
    tracing::info!(
        user_id = admin.user_id,
        use_svg_fallback = settings.use_svg_fallback,
        "Intro settings updated"
    );
    Ok(Json(DataResponse { data: settings }))
}
