use axum::http::StatusCode;
use serde::{de, Deserialize, Deserializer};
use utoipa::IntoParams;

use crate::{
    model::{api::ProblemDocument, debug::ValidationRequestDto},
    server::{
        error::AppError,
        extract::{AppQuery, ValidatedJson},
        util::http_status::KnownStatus,
    },
};

/// Tag for grouping debug endpoints in OpenAPI documentation
pub static DEBUG_TAG: &str = "debug";

pub const UNSUPPORTED_STATUS_REASON: &str = "unsupported status code";
pub const TEST_ERROR_REASON: &str = "test error";

const DEFAULT_STATUS: i32 = 500;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RaiseErrorParams {
    /// HTTP status code to raise (default: 500)
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<i32>,
}

/// Parses an optional integer parameter, treating an empty or whitespace-only value as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Raise an error with the requested HTTP status.
///
/// Exercises the error translation path end to end. The endpoint never succeeds: it fails
/// with the requested status when that status is recognized, and with 400 otherwise.
///
/// # Arguments
/// - `params` - Query parameters containing the status code to raise
///
/// # Returns
/// - `<status>` - Problem document with the requested status and detail "test error"
/// - `400 Bad Request` - Status code is not recognized
/// - `500 Internal Server Error` - Query string could not be parsed
#[utoipa::path(
    get,
    path = "/debug/errors",
    tag = DEBUG_TAG,
    params(RaiseErrorParams),
    responses(
        (status = 400, description = "Unsupported status code", body = ProblemDocument, content_type = "application/problem+json"),
        (status = 500, description = "Requested (default) status, or unparsable query string", body = ProblemDocument, content_type = "application/problem+json")
    ),
)]
pub async fn raise_error(
    AppQuery(params): AppQuery<RaiseErrorParams>,
) -> Result<StatusCode, AppError> {
    let status = KnownStatus::resolve(params.status.unwrap_or(DEFAULT_STATUS).into())
        .ok_or_else(|| AppError::status(KnownStatus::BAD_REQUEST, UNSUPPORTED_STATUS_REASON))?;

    Err(AppError::status(status, TEST_ERROR_REASON))
}

/// Validate a payload without side effects.
///
/// Runs the field validation rules for `ValidationRequestDto`; failures are reported by the
/// extractor through the global error translator.
///
/// # Returns
/// - `204 No Content` - Payload is valid
/// - `400 Bad Request` - Body is not readable JSON
/// - `415 Unsupported Media Type` - Body is not declared as JSON
/// - `422 Unprocessable Entity` - One or more fields failed validation
#[utoipa::path(
    post,
    path = "/debug/validate",
    tag = DEBUG_TAG,
    request_body = ValidationRequestDto,
    responses(
        (status = 204, description = "Payload is valid"),
        (status = 400, description = "Body is not readable JSON", body = ProblemDocument, content_type = "application/problem+json"),
        (status = 415, description = "Body is not declared as JSON", body = ProblemDocument, content_type = "application/problem+json"),
        (status = 422, description = "Field validation failed", body = ProblemDocument, content_type = "application/problem+json")
    ),
)]
pub async fn validate(
    ValidatedJson(_request): ValidatedJson<ValidationRequestDto>,
) -> StatusCode {
    StatusCode::NO_CONTENT
}
