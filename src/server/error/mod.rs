//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the single translation from
//! errors to problem documents. `AppError` is the top-level error returned by every handler
//! and extractor; its `IntoResponse` implementation runs [`AppError::into_problem`], an
//! exhaustive match, so every failure leaves the server as an `application/problem+json`
//! document and no raw error reaches the caller.

pub mod config;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::{any::Any, collections::BTreeMap};
use thiserror::Error;

use crate::{
    model::api::{ProblemDocument, APPLICATION_PROBLEM_JSON},
    server::{
        error::config::ConfigError,
        util::http_status::{status_label, KnownStatus},
        validation::{ConstraintViolation, ValidationErrors},
    },
};

pub const VALIDATION_FAILED_CODE: &str = "VALIDATION_FAILED";
pub const BAD_REQUEST_CODE: &str = "BAD_REQUEST";
pub const SERVER_ERROR_CODE: &str = "SERVER_ERROR";

pub const VALIDATION_FAILED_DETAIL: &str = "input is invalid";
pub const MALFORMED_BODY_DETAIL: &str = "could not read request body";
pub const SERVER_ERROR_DETAIL: &str = "a server error occurred";

/// Property path used for parameter violations whose path is unavailable.
const UNKNOWN_PROPERTY_PATH: &str = "unknown";

/// Top-level application error type.
///
/// One variant per category of failure. Infrastructure errors use `#[from]` for automatic
/// conversion with `?` and all map to the generic 500 document.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body failed field validation.
    ///
    /// Results in 422 Unprocessable Entity with violation messages grouped per field.
    #[error("Request validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A request parameter (query string or path variable) violated a constraint.
    ///
    /// Results in 422 Unprocessable Entity with messages grouped per property path.
    #[error("Constraint violation: {0:?}")]
    ConstraintViolation(Vec<ConstraintViolation>),

    /// Request body could not be read or parsed.
    ///
    /// Results in 400 Bad Request. The reason is logged, never returned to the client.
    ///
    /// # Fields
    /// - Parser or transport message describing the failure
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Error raised by application code with an explicit HTTP status.
    ///
    /// Results in the carried status when it is recognized, otherwise 500. The reason
    /// becomes the problem detail.
    #[error("Status {status}: {}", .reason.as_deref().unwrap_or("<no reason>"))]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Client-facing reason; the status reason phrase is used when absent
        reason: Option<String>,
    },

    /// Error that already carries its complete problem document.
    ///
    /// Returned as-is, with a blank title or code filled from the status label.
    #[error("Problem {}: {}", .0.status, .0.detail)]
    Problem(ProblemDocument),

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, e.g. failing to bind the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Creates an explicit status error with a client-facing reason.
    pub fn status(status: KnownStatus, reason: impl Into<String>) -> Self {
        Self::Status {
            status: status.code,
            reason: Some(reason.into()),
        }
    }

    /// Translates the error into the problem document sent to the client.
    ///
    /// Total over every variant; internal details of infrastructure errors never appear
    /// in the result.
    pub fn into_problem(self) -> ProblemDocument {
        match self {
            Self::Validation(errors) => validation_problem(errors.by_field()),
            Self::ConstraintViolation(violations) => {
                let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
                for violation in violations {
                    let path = violation
                        .property_path
                        .unwrap_or_else(|| UNKNOWN_PROPERTY_PATH.to_string());
                    grouped.entry(path).or_default().push(violation.message);
                }
                validation_problem(grouped)
            }
            Self::MalformedBody(_) => {
                problem_for(KnownStatus::BAD_REQUEST, MALFORMED_BODY_DETAIL)
                    .with_code(BAD_REQUEST_CODE)
            }
            Self::Status { status, reason } => {
                let resolved =
                    KnownStatus::resolve(status.into()).unwrap_or(KnownStatus::INTERNAL_SERVER_ERROR);
                let detail = reason.unwrap_or_else(|| resolved.reason.to_string());
                problem_for(resolved, detail).with_code(resolved.name)
            }
            Self::Problem(mut problem) => {
                if problem.title.trim().is_empty() {
                    problem.title = status_label(problem.status);
                }
                if problem.code.trim().is_empty() {
                    problem.code = status_label(problem.status);
                }
                problem
            }
            Self::ConfigErr(_) | Self::DbErr(_) | Self::IoErr(_) | Self::InternalError(_) => {
                server_error_problem()
            }
        }
    }
}

/// Creates a document titled with the status reason phrase.
pub fn problem_for(status: KnownStatus, detail: impl Into<String>) -> ProblemDocument {
    ProblemDocument::new(status.code, detail).with_title(status.reason)
}

fn validation_problem(errors: BTreeMap<String, Vec<String>>) -> ProblemDocument {
    problem_for(KnownStatus::UNPROCESSABLE_ENTITY, VALIDATION_FAILED_DETAIL)
        .with_code(VALIDATION_FAILED_CODE)
        .with_errors(errors)
}

fn server_error_problem() -> ProblemDocument {
    problem_for(KnownStatus::INTERNAL_SERVER_ERROR, SERVER_ERROR_DETAIL).with_code(SERVER_ERROR_CODE)
}

/// Converts application errors into HTTP responses.
///
/// Client errors are logged at debug level and server errors at error level, both with the
/// full internal message; the response only carries the translated problem document.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let problem = self.into_problem();

        if problem.status >= 500 {
            tracing::error!("{}", message);
        } else {
            tracing::debug!("{}", message);
        }

        problem.into_response()
    }
}

/// Serializes the document with its own status and the problem media type.
impl IntoResponse for ProblemDocument {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        response
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns the generic server error document to avoid leaking
/// implementation details. Used for failures that never become an `AppError`, such as
/// panics caught by the router.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        server_error_problem().into_response()
    }
}

/// Converts a panic payload caught by `CatchPanicLayer` into the generic 500 document.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    InternalServerError(format!("Request handler panicked: {}", message)).into_response()
}
