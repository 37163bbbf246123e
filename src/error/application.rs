use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{
    api::ErrorDto,
    application::{ApplicationStatus, Category},
};

/// Violations of the submission and lifecycle rules.
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// The user already holds an application that blocks a new submission
    /// in this category (pending review, or a standing approval for the
    /// categories where approval occupies the slot).
    ///
    /// Results in a 400 Bad Request response; no record is created.
    #[error("User already has an active {0} application")]
    AlreadyApplied(Category),

    /// The category requires an approved whitelist application first.
    ///
    /// Results in a 400 Bad Request response; no record is created.
    #[error("A whitelist approval is required before applying for {0}")]
    WhitelistRequired(Category),

    /// Required narrative fields for the category were missing or blank.
    ///
    /// Results in a 400 Bad Request response naming the missing keys.
    #[error("Missing required fields for {category}: {fields:?}")]
    MissingFields {
        category: Category,
        fields: Vec<String>,
    },

    /// A submitted field key is not part of the category's schema.
    ///
    /// Results in a 400 Bad Request response naming the unknown key.
    #[error("Field '{field}' is not part of the {category} application form")]
    UnknownField { category: Category, field: String },

    /// The application has already been decided; terminal states are final.
    ///
    /// Results in a 409 Conflict response; the stored status is untouched.
    #[error("Application {id} was already decided as {status}")]
    AlreadyDecided {
        id: i32,
        status: ApplicationStatus,
    },

    /// The requested target status is not a terminal decision.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{0} is not a decision status")]
    NotTerminal(ApplicationStatus),
}

/// Converts application rule violations into HTTP responses.
///
/// Every message here is applicant- or admin-facing and states the reason
/// directly, since these are expected rule violations rather than faults.
///
/// # Returns
/// - 400 Bad Request - For eligibility blocks and field validation failures
/// - 409 Conflict - For decisions on already-decided applications
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyApplied(category) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!(
                        "You already have an active {} application. Wait for it to be processed before submitting a new one.",
                        category
                    ),
                }),
            )
                .into_response(),
            Self::WhitelistRequired(category) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!(
                        "You must be whitelisted before you can apply for {}.",
                        category
                    ),
                }),
            )
                .into_response(),
            Self::MissingFields { category, fields } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!(
                        "The {} application is missing required fields: {}.",
                        category,
                        fields.join(", ")
                    ),
                }),
            )
                .into_response(),
            Self::UnknownField { category, field } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!(
                        "'{}' is not a field of the {} application form.",
                        field, category
                    ),
                }),
            )
                .into_response(),
            Self::AlreadyDecided { id, status } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: format!("Application {} has already been decided as {}.", id, status),
                }),
            )
                .into_response(),
            Self::NotTerminal(status) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("{} is not a valid decision for an application.", status),
                }),
            )
                .into_response(),
        }
    }
}
