//! Bearer-token authentication.
//!
//! The token only proves who the caller is. Whether the account is still
//! active, and which role it holds, is read from the database on every
//! request, so deactivation and role changes apply to tokens already issued.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use goldleaf_core::error::CoreError;
use goldleaf_core::roles::Role;
use goldleaf_core::types::DbId;
use goldleaf_db::repositories::UserRepo;

use crate::auth::jwt::decode_access_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller behind a valid access token.
///
/// ```ignore
/// async fn whoami(user: AuthUser) -> AppResult<Json<DbId>> {
///     Ok(Json(user.user_id))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: DbId,
    /// Current effective role.
    pub role: Role,
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;
    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = decode_access_token(bearer_token(parts)?, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let access = UserRepo::find_access(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| unauthorized("User no longer exists"))?;

        if !access.is_active {
            return Err(unauthorized("Account is deactivated"));
        }

        let role = Role::effective(access.is_superuser, access.profile_role.as_deref());
        if role != claims.role {
            tracing::debug!(user_id = access.id, token_role = %claims.role, %role, "Role changed since token was issued");
        }

        Ok(AuthUser {
            user_id: access.id,
            role,
        })
    }
}
