//! Axum route configuration and API documentation.

use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{application, auth, gate, user},
    model,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Avanha Portal API",
        description = "Steam-authenticated application portal for the AvanhaRP community"
    ),
    paths(
        auth::login,
        auth::steam_return,
        auth::logout,
        auth::get_user,
        gate::get_gates,
        gate::toggle_gate,
        application::submit_application,
        application::get_my_application,
        application::get_applications,
        application::decide_application,
        application::delete_application,
        application::designate_whitelist,
        user::get_users,
        user::set_user_role,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::MessageDto,
        model::application::Category,
        model::application::ApplicationStatus,
        model::application::ApplicationDto,
        model::application::CreateApplicationDto,
        model::application::UpdateStatusDto,
        model::application::DesignationOutcome,
        model::application::DesignationDto,
        model::gate::CategoryGateDto,
        model::gate::ToggleGateDto,
        model::user::Role,
        model::user::UserDto,
        model::user::CurrentUserDto,
        model::user::SetRoleDto,
    )),
    tags(
        (name = "auth", description = "Steam login and the current user"),
        (name = "application", description = "Submission and review of applications"),
        (name = "gate", description = "Category submission gates"),
        (name = "user", description = "Admin user management")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/return", get(auth::steam_return))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/gates", get(gate::get_gates))
        .route(
            "/api/applications/{category}",
            post(application::submit_application),
        )
        .route(
            "/api/applications/{category}/mine",
            get(application::get_my_application),
        )
        .route(
            "/api/admin/applications/{category}",
            get(application::get_applications),
        )
        .route(
            "/api/admin/applications/{category}/{id}/status",
            post(application::decide_application),
        )
        .route(
            "/api/admin/applications/{category}/{id}",
            delete(application::delete_application),
        )
        .route(
            "/api/admin/whitelist/{steam_id}/designation",
            post(application::designate_whitelist),
        )
        .route("/api/admin/gates/{category}", post(gate::toggle_gate))
        .route("/api/admin/users", get(user::get_users))
        .route("/api/admin/users/{steam_id}/role", post(user::set_user_role))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
