//! Route definitions for the public `/site` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Routes mounted at `/site`. No authentication.
///
/// ```text
/// GET /home                -> home
/// GET /services            -> services
/// GET /services/{slug}     -> service_detail
/// GET /projects            -> projects
/// GET /projects/{slug}     -> project_detail
/// GET /insights            -> insights (?page=)
/// GET /insights/{slug}     -> insight_detail
/// GET /footer              -> footer
/// GET /metadata            -> metadata (?page=&custom_slug=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(site::home))
        .route("/services", get(site::services))
        .route("/services/{slug}", get(site::service_detail))
        .route("/projects", get(site::projects))
        .route("/projects/{slug}", get(site::project_detail))
        .route("/insights", get(site::insights))
        .route("/insights/{slug}", get(site::insight_detail))
        .route("/footer", get(site::footer))
        .route("/metadata", get(site::metadata))
}
