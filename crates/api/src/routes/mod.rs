pub mod auth;
pub mod dashboard;
pub mod health;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /site/home                                       landing page (public)
/// /site/services                                   services listing (public)
/// /site/services/{slug}                            service detail (public)
/// /site/projects                                   project listing (public)
/// /site/projects/{slug}                            project detail (public)
/// /site/insights                                   published insights (?page=)
/// /site/insights/{slug}                            insight detail (public)
/// /site/footer                                     footer services (public)
/// /site/metadata                                   SEO metadata (?page=&custom_slug=)
///
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /dashboard                                       overview (authors redirected)
/// /dashboard/services[/{id}]                       CRUD (admin only)
/// /dashboard/insights[/{id}]                       CRUD (admin or blog author)
/// /dashboard/heroes[/{id}]                         CRUD (admin only)
/// /dashboard/projects[/{id}]                       CRUD (admin only)
/// /dashboard/metadata[/{id}]                       CRUD (admin only)
/// /dashboard/process-steps[/{id}]                  CRUD (admin only)
/// /dashboard/intro-settings                        get, update (admin only)
/// /dashboard/gallery                               browse (admin or blog author)
/// /dashboard/gallery/images                        all assets (admin or blog author)
/// /dashboard/gallery/upload                        upload (requires auth)
/// /dashboard/gallery/{id}                          delete (requires auth)
/// /dashboard/users[/{id}]                          user management (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public marketing site.
        .nest("/site", site::router())
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Content management.
        .nest("/dashboard", dashboard::router())
}
