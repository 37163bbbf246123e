use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user could be resolved for the request.
    ///
    /// Either the session carries no user id or the referenced user no longer
    /// exists. Results in a 401 Unauthorized response; clients are expected to
    /// redirect to the login flow.
    #[error("No authenticated user in session")]
    NotAuthenticated,

    /// The resolved user lacks the role required for the operation.
    ///
    /// Results in a 403 Forbidden response with no state change.
    #[error("User {0} is not permitted to {1}")]
    AccessDenied(u64, String),

    /// Steam's check_authentication endpoint did not confirm the assertion.
    ///
    /// The signed OpenID parameters replayed to Steam came back without
    /// `is_valid:true`, meaning the login cannot be trusted. Results in a
    /// 401 Unauthorized response.
    #[error("OpenID assertion was rejected by Steam")]
    AssertionRejected,

    /// The OpenID return parameters were structurally invalid.
    ///
    /// Covers an unexpected mode, a claimed id outside Steam's namespace, or
    /// an unparseable SteamID64. Results in a 400 Bad Request response.
    #[error("Malformed OpenID return: {0}")]
    MalformedAssertion(String),

    /// Steam returned no profile for a verified SteamID64.
    ///
    /// Should not happen for a freshly verified login; treated as an upstream
    /// failure. Results in a 500 Internal Server Error response.
    #[error("Steam returned no player summary for {0}")]
    ProfileNotFound(u64),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed variants are for
/// server-side logs.
///
/// # Returns
/// - 400 Bad Request - For malformed OpenID returns
/// - 401 Unauthorized - For missing sessions and rejected assertions
/// - 403 Forbidden - For role checks that fail
/// - 500 Internal Server Error - For missing player summaries
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do this.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(steam_id, action) => {
                tracing::debug!("Denied user {} attempting to {}", steam_id, action);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to do this.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AssertionRejected => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Steam could not verify your login, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::MalformedAssertion(detail) => {
                tracing::debug!("Malformed OpenID return: {}", detail);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            err => crate::error::InternalServerError(err).into_response(),
        }
    }
}
