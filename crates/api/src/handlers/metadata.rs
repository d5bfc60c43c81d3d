//! Handlers for `/dashboard/metadata` (admin only): per-page SEO metadata.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use goldleaf_core::error::CoreError;
use goldleaf_core::pages::{validate_custom_slug, validate_metadata_page, PAGE_HOME};
use goldleaf_core::types::DbId;
use goldleaf_core::validation::{optional_non_blank, require_non_blank};
use goldleaf_db::models::page_metadata::{CreatePageMetadata, PageMetadata, UpdatePageMetadata};
use goldleaf_db::repositories::PageMetadataRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn metadata_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Page metadata",
        id,
    })
}

/// GET /api/v1/dashboard/metadata
pub async fn list_metadata(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<PageMetadata>>>> {
    let entries = PageMetadataRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/dashboard/metadata
///
/// One entry per page (and custom slug); a duplicate is 409.
pub async fn create_metadata(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreatePageMetadata>,
) -> AppResult<(StatusCode, Json<DataResponse<PageMetadata>>)> {
    require_non_blank("title", &input.title)?;
    let page = input.page.as_deref().unwrap_or(PAGE_HOME);
    validate_metadata_page(page)?;
    validate_custom_slug(page, input.custom_slug.as_deref().unwrap_or_default())?;

    let entry = PageMetadataRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = admin.user_id,
        metadata_id = entry.id,
        page = %entry.page,
        "Page metadata created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /api/v1/dashboard/metadata/{id}
pub async fn get_metadata(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PageMetadata>>> {
    let entry = PageMetadataRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| metadata_not_found(id))?;
    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/dashboard/metadata/{id}
pub async fn update_metadata(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePageMetadata>,
) -> AppResult<Json<DataResponse<PageMetadata>>> {
    optional_non_blank("title", input.title.as_deref())?;
    if let Some(page) = input.page.as_deref() {
        validate_metadata_page(page)?;
    }

    let existing = PageMetadataRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| metadata_not_found(id))?;
    validate_custom_slug(
        input.page.as_deref().unwrap_or(&existing.page),
        input.custom_slug.as_deref().unwrap_or(&existing.custom_slug),
    )?;

    let entry = PageMetadataRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| metadata_not_found(id))?;
    tracing::info!(user_id = admin.user_id, metadata_id = id, "Page metadata updated");
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/dashboard/metadata/{id}
pub async fn delete_metadata(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PageMetadataRepo::delete(&state.pool, id).await? {
        return Err(metadata_not_found(id));
    }
    tracing::info!(user_id = admin.user_id, metadata_id = id, "Page metadata deleted");
    Ok(StatusCode::NO_CONTENT)
}
