//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Site management (services, heroes, users, ...).
//! - [`rbac::RequireAuthor`] -- Insights and the gallery.
//! - [`rbac::RequireAuth`] -- Any logged-in user.

pub mod auth;
pub mod rbac;
