//! Handlers for `/dashboard/process-steps` (admin only): the shared
//! "how we work" steps on the services page.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use goldleaf_core::error::CoreError;
use goldleaf_core::types::DbId;
use goldleaf_core::validation::{optional_non_blank, require_non_blank};
use goldleaf_db::models::process_step::{CreateProcessStep, ProcessStep, UpdateProcessStep};
use goldleaf_db::repositories::ProcessStepRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn step_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Process step",
        id,
    })
}

/// GET /api/v1/dashboard/process-steps
pub async fn list_steps(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<ProcessStep>>>> {
    let steps = ProcessStepRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: steps }))
}

/// POST /api/v1/dashboard/process-steps
pub async fn create_step(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateProcessStep>,
) -> AppResult<(StatusCode, Json<DataResponse<ProcessStep>>)> {
    require_non_blank("title", &input.title)?;
    let step = ProcessStepRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = admin.user_id, step_id = step.id, "Process step created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: step })))
}

/// GET /api/v1/dashboard/process-steps/{id}
pub async fn get_step(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProcessStep>>> {
    let step = ProcessStepRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| step_not_found(id))?;
    Ok(Json(DataResponse { data: step }))
}

/// PUT /api/v1/dashboard/process-steps/{id}
pub async fn update_step(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProcessStep>,
) -> AppResult<Json<DataResponse<ProcessStep>>> {
    optional_non_blank("title", input.title.as_deref())?;
    let step = ProcessStepRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| step_not_found(id))?;
    tracing::info!(user_id = admin.user_id, step_id = id, "Process step updated");
    Ok(Json(DataResponse { data: step }))
}

/// DELETE /api/v1/dashboard/process-steps/{id}
pub async fn delete_step(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProcessStepRepo::delete(&state.pool, id).await? {
        return Err(step_not_found(id));
    }
    tracing::info!(user_id = admin.user_id, step_id = id, "Process step deleted");
    Ok(StatusCode::NO_CONTENT)
}
