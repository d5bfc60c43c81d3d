//! Handler for the dashboard landing endpoint.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use goldleaf_core::roles::Role;
use goldleaf_db::models::insight::Insight;
use goldleaf_db::models::service::Service;
use goldleaf_db::repositories::{HeroRepo, InsightRepo, MediaAssetRepo, ServiceRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Where blog authors land instead of the overview.
pub const AUTHOR_HOME: &str = "/api/v1/dashboard/insights";

/// Recent insights and services shown on the overview.
const OVERVIEW_LIST_SIZE: i64 = 5;

#[derive(Debug, Serialize)]
pub struct DashboardCounts {
    pub services: i64,
    pub insights: i64,
    pub heroes: i64,
    pub media: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub counts: DashboardCounts,
    pub recent_insights: Vec<Insight>,
    pub services: Vec<Service>,
}

/// GET /api/v1/dashboard
///
/// Blog authors are redirected (303) to their insights list.
pub async fn overview(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Response> {
    if user.role == Role::BlogAuthor {
        return Ok(Redirect::to(AUTHOR_HOME).into_response());
    }

    let counts = DashboardCounts {
        services: ServiceRepo::count(&state.pool).await?,
        insights: InsightRepo::count(&state.pool).await?,
        heroes: HeroRepo::count(&state.pool).await?,
        media: MediaAssetRepo::count(&state.pool).await?,
    };
    let recent_insights = InsightRepo::list_published(&state.pool, OVERVIEW_LIST_SIZE, 0).await?;
    let services = ServiceRepo::list_first(&state.pool, OVERVIEW_LIST_SIZE).await?;

    Ok(Json(DataResponse {
        data: DashboardOverview {
            counts,
            recent_insights,
            services,
        },
    })
    .into_response())
}
