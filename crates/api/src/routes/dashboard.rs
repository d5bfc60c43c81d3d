//! Route definitions for the `/dashboard` resource.
//!
//! Access is enforced per handler by the RBAC extractors.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    dashboard, gallery, heroes, insights, intro_settings, metadata, process_steps, projects,
    services, users,
};
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET                 /                       -> overview
/// GET, POST           /services               -> list_services, create_service
/// GET, PUT, DELETE    /services/{id}
/// GET, POST           /insights               -> list_insights (?status=), create_insight
/// GET, PUT, DELETE    /insights/{id}
/// GET, POST           /heroes
/// GET, PUT, DELETE    /heroes/{id}
/// GET, POST           /projects
/// GET, PUT, DELETE    /projects/{id}
/// GET, POST           /metadata
/// GET, PUT, DELETE    /metadata/{id}
/// GET, POST           /process-steps
/// GET, PUT, DELETE    /process-steps/{id}
/// GET, PUT            /intro-settings
/// GET                 /gallery                -> gallery (?page=)
/// GET                 /gallery/images         -> list_images
/// POST                /gallery/upload         -> upload (multipart)
/// DELETE              /gallery/{id}           -> delete_image
/// GET, POST           /users
/// GET, PUT            /users/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::overview))
        .route(
            "/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/services/{id}",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
        .route(
            "/insights",
            get(insights::list_insights).post(insights::create_insight),
        )
        .route(
            "/insights/{id}",
            get(insights::get_insight)
                .put(insights::update_insight)
                .delete(insights::delete_insight),
        )
        .route("/heroes", get(heroes::list_heroes).post(heroes::create_hero))
        .route(
            "/heroes/{id}",
            get(heroes::get_hero)
                .put(heroes::update_hero)
                .delete(heroes::delete_hero),
        )
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route(
            "/metadata",
            get(metadata::list_metadata).post(metadata::create_metadata),
        )
        .route(
            "/metadata/{id}",
            get(metadata::get_metadata)
                .put(metadata::update_metadata)
                .delete(metadata::delete_metadata),
        )
        .route(
            "/process-steps",
            get(process_steps::list_steps).post(process_steps::create_step),
        )
        .route(
            "/process-steps/{id}",
            get(process_steps::get_step)
                .put(process_steps::update_step)
                .delete(process_steps::delete_step),
        )
        .route(
            "/intro-settings",
            get(intro_settings::get_intro_settings).put(intro_settings::update_intro_settings),
        )
        .route("/gallery", get(gallery::gallery))
        .route("/gallery/images", get(gallery::list_images))
        .route("/gallery/upload", post(gallery::upload))
        .route("/gallery/{id}", axum::routing::delete(gallery::delete_image))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user).put(users::update_user))
}
