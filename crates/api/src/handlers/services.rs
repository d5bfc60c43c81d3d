//! Handlers for `/dashboard/services` (admin only).
//!
//! Writes return `{data, warnings}`: the saved row plus a warning for every
//! structured-field record the public pages will ignore.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use goldleaf_core::error::CoreError;
use goldleaf_core::fields::{lint_records, RecordShape};
use goldleaf_core::types::DbId;
use goldleaf_core::validation::{
    optional_non_blank, require_non_blank, validate_new_slug, validate_slug_input,
};
use goldleaf_db::models::service::{CreateService, Service, UpdateService};
use goldleaf_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, WithWarnings};
use crate::state::AppState;

/// Warnings for every structured record of `service` that parsing drops.
pub fn service_warnings(service: &Service) -> Vec<String> {
    [
        ("stats_strip_data", &service.stats_strip_data, RecordShape::TRIPLE),
        ("timeline_data", &service.timeline_data, RecordShape::PAIR),
        ("process_steps_data", &service.process_steps_data, RecordShape::TRIPLE),
        ("showcase_projects_data", &service.showcase_projects_data, RecordShape::PAIR),
        ("specs_data", &service.specs_data, RecordShape::PAIR),
        ("faq_data", &service.faq_data, RecordShape::PAIR),
    ]
    .into_iter()
    .flat_map(|(column, raw, shape)| lint_records(column, raw, shape))
    .collect()
}

fn saved(service: Service) -> WithWarnings<Service> {
    WithWarnings {
        warnings: service_warnings(&service),
        data: service,
    }
}

/// GET /api/v1/dashboard/services
pub async fn list_services(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Service>>>> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// POST /api/v1/dashboard/services
pub async fn create_service(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<WithWarnings<Service>>)> {
    require_non_blank("title", &input.title)?;
    validate_new_slug(input.slug.as_deref(), &input.title)?;

    let service = ServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = admin.user_id,
        service_id = service.id,
        slug = %service.slug,
        "Service created"
    );
    Ok((StatusCode::CREATED, Json(saved(service))))
}

/// GET /api/v1/dashboard/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<WithWarnings<Service>>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(saved(service)))
}

/// PUT /api/v1/dashboard/services/{id}
///
/// A blank slug keeps the current one.
pub async fn update_service(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<WithWarnings<Service>>> {
    optional_non_blank("title", input.title.as_deref())?;
    validate_slug_input(input.slug.as_deref())?;

    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    tracing::info!(user_id = admin.user_id, service_id = id, "Service updated");
    Ok(Json(saved(service)))
}

/// DELETE /api/v1/dashboard/services/{id}
///
/// Projects linked to the service keep existing without the link.
pub async fn delete_service(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }));
    }
    tracing::info!(user_id = admin.user_id, service_id = id, "Service deleted");
    Ok(StatusCode::NO_CONTENT)
}
