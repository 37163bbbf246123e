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
        application::Category,
        gate::{CategoryGateDto, ToggleGateDto},
    },
    service::gate::GateService,
    state::AppState,
};

/// Tag for grouping category gate endpoints in OpenAPI documentation
pub static GATE_TAG: &str = "gate";

/// List the submission gate for every category.
///
/// Public: applicants read this to know which forms are advertised as open.
/// The flag is advisory and does not affect submission eligibility.
///
/// # Returns
/// - `200 OK` - One gate record per category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/gates",
    tag = GATE_TAG,
    responses(
        (status = 200, description = "All category gates", body = Vec<CategoryGateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gates(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let gates = GateService::new(&state.db).list().await?;

    let dtos: Vec<CategoryGateDto> = gates.into_iter().map(|gate| gate.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Open or close a category's submission gate.
///
/// # Access Control
/// - `Admin` - Only admins can toggle gates
///
/// # Returns
/// - `200 OK` - The updated gate record
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/gates/{category}",
    tag = GATE_TAG,
    params(
        ("category" = Category, Path, description = "Application category")
    ),
    request_body = ToggleGateDto,
    responses(
        (status = 200, description = "Gate updated", body = CategoryGateDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_gate(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<Category>,
    Json(payload): Json<ToggleGateDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_admin("toggle category gate")
        .await?;

    let gate = GateService::new(&state.db)
        .toggle(category, payload.is_open)
        .await?;

    Ok((StatusCode::OK, Json(gate.into_dto())))
}
