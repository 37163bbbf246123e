use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::{api::ErrorDto, user::CurrentUserDto},
    service::auth::{callback::SteamReturnParams, SteamAuthService},
    state::AppState,
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Begin the Steam login flow.
///
/// Redirects the browser to the Steam community login page. Steam sends the
/// user back to `/api/auth/return` with a signed OpenID assertion.
///
/// # Returns
/// - `307 Temporary Redirect` - To the Steam login page
/// - `500 Internal Server Error` - The login URL could not be built
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Steam login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let auth_service = SteamAuthService::new(
        &state.db,
        &state.http_client,
        &state.steam_api_key,
        &state.app_url,
        state.bootstrap_admin,
    );

    let url = auth_service.login_url()?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the Steam login flow.
///
/// Verifies the OpenID assertion with Steam, upserts the user from their
/// player summary, stores the steam id in the session, and sends the
/// browser back to the portal.
///
/// # Returns
/// - `307 Temporary Redirect` - Login complete, back to `/`
/// - `400 Bad Request` - The assertion is malformed
/// - `401 Unauthorized` - Steam rejected the assertion
/// - `500 Internal Server Error` - Steam or database failure
#[utoipa::path(
    get,
    path = "/api/auth/return",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Login complete, redirect to the portal"),
        (status = 400, description = "Malformed OpenID assertion", body = ErrorDto),
        (status = 401, description = "Steam rejected the assertion", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn steam_return(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SteamReturnParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = SteamAuthService::new(
        &state.db,
        &state.http_client,
        &state.steam_api_key,
        &state.app_url,
        state.bootstrap_admin,
    );

    let user = auth_service.callback(&params).await?;

    AuthSession::new(&session).set_steam_id(user.steam_id).await?;

    tracing::info!("User {} logged in", user.steam_id);

    Ok(Redirect::temporary("/"))
}

/// Log the current user out.
///
/// Clears the session and sends the browser back to the portal.
///
/// # Returns
/// - `307 Temporary Redirect` - Session cleared, back to `/`
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the portal")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary("/"))
}

/// Get the current user.
///
/// Resolves the session to the stored user plus the derived whitelist flag.
/// The flag is recomputed on every call, so a fresh approval shows up
/// without re-login.
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The current user", body = CurrentUserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
