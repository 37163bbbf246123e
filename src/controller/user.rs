use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        user::{SetRoleDto, UserDto},
    },
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every registered user.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Users ordered by registration time descending
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users, newest first", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_admin("list users")
        .await?;

    let users = UserService::new(&state.db).list().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Set a user's role.
///
/// Grants or revokes the admin role for a user. Takes effect on the user's
/// next request; no re-login is needed.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK` - The user with the new role
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No user with that steam id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/users/{steam_id}/role",
    tag = USER_TAG,
    params(
        ("steam_id" = u64, Path, description = "SteamID64 of the user")
    ),
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(steam_id): Path<u64>,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_admin("set user role")
        .await?;

    let user = UserService::new(&state.db)
        .set_role(steam_id, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
