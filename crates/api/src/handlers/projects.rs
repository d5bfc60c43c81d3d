//! Handlers for `/dashboard/projects` (admin only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use goldleaf_core::error::CoreError;
use goldleaf_core::fields::{lint_records, RecordShape};
use goldleaf_core::types::DbId;
use goldleaf_core::validation::{
    optional_non_blank, require_non_blank, validate_new_slug, validate_slug_input,
};
use goldleaf_db::models::project::{CreateProject, Project, UpdateProject};
use goldleaf_db::repositories::{ProjectRepo, ServiceRepo};
use goldleaf_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, WithWarnings};
use crate::state::AppState;

fn saved(project: Project) -> WithWarnings<Project> {
    WithWarnings {
        warnings: lint_records("specs_data", &project.specs_data, RecordShape::EXACT_PAIR),
        data: project,
    }
}

fn project_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// The linked service, when one is named, must exist.
async fn ensure_service_exists(pool: &DbPool, service_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = service_id {
        if ServiceRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Related service {id} does not exist"
            ))));
        }
    }
    Ok(())
}

/// GET /api/v1/dashboard/projects
pub async fn list_projects(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/dashboard/projects
pub async fn create_project(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<WithWarnings<Project>>)> {
    require_non_blank("title", &input.title)?;
    require_non_blank("location", &input.location)?;
    require_non_blank("category", &input.category)?;
    validate_new_slug(input.slug.as_deref(), &input.title)?;
    ensure_service_exists(&state.pool, input.related_service_id).await?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = admin.user_id,
        project_id = project.id,
        slug = %project.slug,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(saved(project))))
}

/// GET /api/v1/dashboard/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<WithWarnings<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(Json(saved(project)))
}

/// PUT /api/v1/dashboard/projects/{id}
///
/// `"related_service_id": null` unlinks the service; leaving the field out
/// keeps it.
pub async fn update_project(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<WithWarnings<Project>>> {
    optional_non_blank("title", input.title.as_deref())?;
    optional_non_blank("location", input.location.as_deref())?;
    optional_non_blank("category", input.category.as_deref())?;
    validate_slug_input(input.slug.as_deref())?;
    ensure_service_exists(&state.pool, input.related_service_id.flatten()).await?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    tracing::info!(user_id = admin.user_id, project_id = id, "Project updated");
    Ok(Json(saved(project)))
}

/// DELETE /api/v1/dashboard/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(project_not_found(id));
    }
    tracing::info!(user_id = admin.user_id, project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
