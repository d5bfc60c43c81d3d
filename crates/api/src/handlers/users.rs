//! Handlers for `/dashboard/users` (user and role management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use goldleaf_core::error::CoreError;
use goldleaf_core::roles::Role;
use goldleaf_core::types::DbId;
use goldleaf_db::models::user::{CreateUser, UpdateUser, User, UserResponse, UserWithProfile};
use goldleaf_db::repositories::{SessionRepo, UserProfileRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /dashboard/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 150, message = "username must be 1-150 characters"))]
    pub username: String,
    #[validate(email(message = "email is not a valid address"))]
    pub email: String,
    pub password: String,
    /// Role name; defaults to `user`.
    pub role: Option<String>,
}

/// Request body for `PUT /dashboard/users/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "email is not a valid address"))]
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub role: Option<String>,
}

fn validate_request(input: &impl Validate) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

fn user_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

fn build_user_response(user: &User, role: Role) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        role: role.as_str().to_string(),
        is_superuser: user.is_superuser,
        is_active: user.is_active,
        last_login_at: user.last_login_at,
        created_at: user.created_at,
    }
}

fn listed_user_response(row: UserWithProfile) -> UserResponse {
    let role = Role::effective(row.is_superuser, row.profile_role.as_deref());
    UserResponse {
        id: row.id,
        username: row.username,
        email: row.email,
        role: role.as_str().to_string(),
        is_superuser: row.is_superuser,
        is_active: row.is_active,
        last_login_at: row.last_login_at,
        created_at: row.created_at,
    }
}

async fn user_to_response(state: &AppState, user: &User) -> AppResult<UserResponse> {
    let role = crate::handlers::auth::effective_role(state, user).await?;
    Ok(build_user_response(user, role))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/users
///
/// All users with their effective role, ordered by username.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let rows = UserRepo::list_with_profiles(&state.pool).await?;
    let users = rows.into_iter().map(listed_user_response).collect();
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/dashboard/users
///
/// Create a user with a profile carrying the requested role.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    validate_request(&input)?;
    validate_password_strength(&input.password)?;
    let role = match input.role.as_deref() {
        Some(name) => Role::parse(name)?,
        None => Role::User,
    };

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username.trim().to_string(),
            email: input.email,
            password_hash: hashed,
            is_superuser: false,
        },
    )
    .await?;
    UserProfileRepo::set_role(&state.pool, user.id, role.as_str()).await?;

    tracing::info!(
        user_id = admin.user_id,
        created_user_id = user.id,
        role = role.as_str(),
        "User created"
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: build_user_response(&user, role),
        }),
    ))
}

/// GET /api/v1/dashboard/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    let response = user_to_response(&state, &user).await?;
    Ok(Json(DataResponse { data: response }))
}

/// PUT /api/v1/dashboard/users/{id}
///
/// Update email, active flag and role. Superusers stay admins whatever
/// their profile says. An inactive user loses every refresh session.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    validate_request(&input)?;
    let role = input.role.as_deref().map(Role::parse).transpose()?;

    let user = UserRepo::update(
        &state.pool,
        id,
        &UpdateUser {
            email: input.email,
            is_active: input.is_active,
        },
    )
    .await?
    .ok_or_else(|| user_not_found(id))?;

    if let Some(role) = role {
        UserProfileRepo::set_role(&state.pool, id, role.as_str()).await?;
    }

    if !user.is_active {
        let revoked = SessionRepo::revoke_all_for_user(&state.pool, id).await?;
        tracing::info!(user_id = id, revoked, "Sessions revoked for inactive user");
    }

    tracing::info!(user_id = admin.user_id, updated_user_id = id, "User updated");
    let response = user_to_response(&state, &user).await?;
    Ok(Json(DataResponse { data: response }))
}
