//! Handlers for `/dashboard/insights` (admins and blog authors).
//!
//! Blog authors only see and change their own posts; admins see everything.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use goldleaf_core::error::CoreError;
use goldleaf_core::pages::{should_stamp_published, validate_insight_status, STATUS_PUBLISHED};
use goldleaf_core::types::DbId;
use goldleaf_core::validation::{
    optional_non_blank, require_non_blank, validate_new_slug, validate_slug_input,
};
use goldleaf_db::models::insight::{CreateInsight, Insight, InsightStats, UpdateInsight};
use goldleaf_db::repositories::insight_repo::InsightFilter;
use goldleaf_db::repositories::InsightRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAuthor;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InsightList {
    pub insights: Vec<Insight>,
    pub stats: InsightStats,
}

/// Posts a user may see: everything for site managers, otherwise their own.
fn visible_author(user: &AuthUser) -> Option<DbId> {
    (!user.role.can_manage_site()).then_some(user.user_id)
}

/// Load an insight and check that `user` may change it.
async fn ensure_editable(state: &AppState, user: &AuthUser, id: DbId) -> AppResult<Insight> {
    let insight = InsightRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Insight",
            id,
        }))?;
    if !user.role.can_manage_site() && insight.author_id != Some(user.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only manage your own insights".into(),
        )));
    }
    Ok(insight)
}

/// GET /api/v1/dashboard/insights?status=
///
/// Newest created first. The stats count the same filtered set of posts.
pub async fn list_insights(
    State(state): State<AppState>,
    RequireAuthor(user): RequireAuthor,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<DataResponse<InsightList>>> {
    let status = filter.status.as_deref().filter(|s| !s.is_empty());
    if let Some(status) = status {
        validate_insight_status(status)?;
    }
    let author_id = visible_author(&user);

    let filter = InsightFilter { author_id, status };
    let insights = InsightRepo::list_for_dashboard(&state.pool, filter).await?;
    let stats = InsightRepo::stats(&state.pool, filter).await?;

    Ok(Json(DataResponse {
        data: InsightList { insights, stats },
    }))
}

/// POST /api/v1/dashboard/insights
///
/// The caller becomes the author. A post created as published is stamped
/// with the current time.
pub async fn create_insight(
    State(state): State<AppState>,
    RequireAuthor(user): RequireAuthor,
    Json(mut input): Json<CreateInsight>,
) -> AppResult<(StatusCode, Json<DataResponse<Insight>>)> {
    require_non_blank("title", &input.title)?;
    validate_new_slug(input.slug.as_deref(), &input.title)?;
    if let Some(status) = input.status.as_deref() {
        validate_insight_status(status)?;
    }

    input.author_id = Some(user.user_id);
    if input.status.as_deref() == Some(STATUS_PUBLISHED) {
        input.published_at = Some(Utc::now());
    }

    let insight = InsightRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        insight_id = insight.id,
        status = %insight.status,
        "Insight created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: insight })))
}

/// GET /api/v1/dashboard/insights/{id}
pub async fn get_insight(
    State(state): State<AppState>,
    RequireAuthor(user): RequireAuthor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Insight>>> {
    let insight = ensure_editable(&state, &user, id).await?;
    Ok(Json(DataResponse { data: insight }))
}

/// PUT /api/v1/dashboard/insights/{id}
///
/// Empty content keeps the stored body. `published_at` is set only the
/// first time the post becomes published.
pub async fn update_insight(
    State(state): State<AppState>,
    RequireAuthor(user): RequireAuthor,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateInsight>,
) -> AppResult<Json<DataResponse<Insight>>> {
    optional_non_blank("title", input.title.as_deref())?;
    validate_slug_input(input.slug.as_deref())?;
    if let Some(status) = input.status.as_deref() {
        validate_insight_status(status)?;
    }

    let existing = ensure_editable(&state, &user, id).await?;

    if input.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
        input.content = None;
    }
    let new_status = input.status.as_deref().unwrap_or(existing.status.as_str());
    let stamp = should_stamp_published(
        Some(existing.status.as_str()),
        new_status,
        existing.published_at.is_some(),
    );

    let insight = InsightRepo::update(&state.pool, id, &input, stamp)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Insight",
            id,
        }))?;
    tracing::info!(user_id = user.user_id, insight_id = id, published = stamp, "Insight updated");
    Ok(Json(DataResponse { data: insight }))
}

/// DELETE /api/v1/dashboard/insights/{id}
pub async fn delete_insight(
    State(state): State<AppState>,
    RequireAuthor(user): RequireAuthor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_editable(&state, &user, id).await?;
    if !InsightRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Insight",
            id,
        }));
    }
    tracing::info!(user_id = user.user_id, insight_id = id, "Insight deleted");
    Ok(StatusCode::NO_CONTENT)
}
