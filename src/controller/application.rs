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
        api::{ErrorDto, MessageDto},
        application::{
            ApplicationDto, Category, CreateApplicationDto, DesignationDto, UpdateStatusDto,
        },
    },
    service::{
        application::ApplicationService, designation::DesignationService,
        lifecycle::LifecycleService,
    },
    state::AppState,
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Submit a new application.
///
/// Creates an application in `AFVENTER` for the logged-in user after the
/// eligibility gate and the category's field schema both pass. Whitelist
/// submissions are blocked by a pending application; police and EMS
/// submissions are blocked by a pending or approved one and require the
/// applicant to be whitelisted.
///
/// # Access Control
/// - Any logged-in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `category` - Application category from the path
/// - `payload` - Applicant block and narrative answers
///
/// # Returns
/// - `201 Created` - The created application
/// - `400 Bad Request` - Not eligible, or the payload fails validation
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/applications/{category}",
    tag = APPLICATION_TAG,
    params(
        ("category" = Category, Path, description = "Application category")
    ),
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationDto),
        (status = 400, description = "Not eligible or invalid payload", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_application(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<Category>,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let application = ApplicationService::new(&state.db)
        .submit(&user, category, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// Get the caller's most recent application in a category.
///
/// # Access Control
/// - Any logged-in user, own applications only
///
/// # Returns
/// - `200 OK` - The newest own application
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - The caller has never applied in this category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/applications/{category}/mine",
    tag = APPLICATION_TAG,
    params(
        ("category" = Category, Path, description = "Application category")
    ),
    responses(
        (status = 200, description = "The caller's newest application", body = ApplicationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No application in this category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_application(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<Category>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let application = ApplicationService::new(&state.db)
        .latest_own(&user, category)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// List every application in a category.
///
/// Returns all applications in the category, newest first, with their
/// narrative answers.
///
/// # Access Control
/// - `Admin` - Only admins can review applications
///
/// # Returns
/// - `200 OK` - Applications ordered by creation time descending
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/applications/{category}",
    tag = APPLICATION_TAG,
    params(
        ("category" = Category, Path, description = "Application category")
    ),
    responses(
        (status = 200, description = "Applications, newest first", body = Vec<ApplicationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<Category>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_admin("list applications")
        .await?;

    let applications = ApplicationService::new(&state.db).list(category).await?;

    let dtos: Vec<ApplicationDto> = applications
        .into_iter()
        .map(|application| application.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Decide a pending application.
///
/// Moves an `AFVENTER` application to `GODKENDT` or `AFVIST` and queues the
/// Discord notice for the applicant. Decided applications are final; this
/// endpoint cannot move them again.
///
/// # Access Control
/// - `Admin` - Only admins can decide applications
///
/// # Returns
/// - `200 OK` - The updated application
/// - `400 Bad Request` - Target status is not terminal
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No such application in this category
/// - `409 Conflict` - The application was already decided
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/applications/{category}/{id}/status",
    tag = APPLICATION_TAG,
    params(
        ("category" = Category, Path, description = "Application category"),
        ("id" = i32, Path, description = "Application id")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Application decided", body = ApplicationDto),
        (status = 400, description = "Target status is not terminal", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_application(
    State(state): State<AppState>,
    session: Session,
    Path((category, id)): Path<(Category, i32)>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_admin("decide application")
        .await?;

    let application = LifecycleService::new(&state.db, &state.dispatcher)
        .decide(category, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Delete an application.
///
/// Hard-deletes the application and its narrative answers. Deleting an id
/// the category does not hold succeeds without changing anything.
///
/// # Access Control
/// - `Admin` - Only admins can delete applications
///
/// # Returns
/// - `200 OK` - Application removed (or was already absent)
/// - `400 Bad Request` - Unknown category in the path
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/applications/{category}/{id}",
    tag = APPLICATION_TAG,
    params(
        ("category" = Category, Path, description = "Application category"),
        ("id" = i32, Path, description = "Application id")
    ),
    responses(
        (status = 200, description = "Application removed", body = MessageDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    session: Session,
    Path((category, id)): Path<(Category, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_admin("delete application")
        .await?;

    LifecycleService::new(&state.db, &state.dispatcher)
        .remove(category, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Application deleted".to_string(),
        }),
    ))
}

/// Grant the whitelist designation roles on Discord.
///
/// Looks up the user's newest approved whitelist application, resolves its
/// Discord username to a guild member by exact match, and grants the role
/// for the chosen outcome. The application's stored status is never touched
/// here; a Discord failure leaves nothing to roll back.
///
/// # Access Control
/// - `Admin` - Only admins can designate users
///
/// # Returns
/// - `200 OK` - Role granted
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No approved whitelist application, or no guild member
///   with that username
/// - `500 Internal Server Error` - Discord or database error
#[utoipa::path(
    post,
    path = "/api/admin/whitelist/{steam_id}/designation",
    tag = APPLICATION_TAG,
    params(
        ("steam_id" = u64, Path, description = "SteamID64 of the user")
    ),
    request_body = DesignationDto,
    responses(
        (status = 200, description = "Role granted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "No approved application or guild member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn designate_whitelist(
    State(state): State<AppState>,
    session: Session,
    Path(steam_id): Path<u64>,
    Json(payload): Json<DesignationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_admin("designate whitelist")
        .await?;

    DesignationService::new(&state.db, &state.discord_http, &state.discord)
        .grant(steam_id, payload.outcome)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Designation role granted".to_string(),
        }),
    ))
}
