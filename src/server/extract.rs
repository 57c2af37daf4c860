//! Request extractors that report failures as [`AppError`].
//!
//! axum's stock extractors reject with their own plain-text responses. These wrappers route
//! every rejection through the problem document translator instead.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Request,
    },
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    model::api::ProblemDocument,
    server::{
        error::{problem_for, AppError},
        util::http_status::KnownStatus,
        validation::Validate,
    },
};

pub const JSON_CONTENT_TYPE_REQUIRED: &str = "Content-Type 'application/json' is required.";

/// Query string extractor rejecting with the generic server error.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// JSON body extractor that also runs the body's [`Validate`] rules.
///
/// # Rejections
/// - `AppError::Problem` (415) - Missing or non-JSON `Content-Type`
/// - `AppError::MalformedBody` (400) - Body unreadable, invalid JSON, or wrong shape
/// - `AppError::Validation` (422) - Body parsed but failed validation
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate()?;

        Ok(Self(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => AppError::Problem(unsupported_media_type()),
            other => AppError::MalformedBody(other.body_text()),
        }
    }
}

/// A query value that cannot be converted to its parameter type is an unclassified failure.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InternalError(format!("Rejected query string: {}", rejection.body_text()))
    }
}

fn unsupported_media_type() -> ProblemDocument {
    problem_for(KnownStatus::UNSUPPORTED_MEDIA_TYPE, JSON_CONTENT_TYPE_REQUIRED)
}
