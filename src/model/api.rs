use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Media type of every error response body.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Problem document returned for every failed request.
///
/// Modeled on RFC 9457 problem details with two extensions: `code`, a machine-readable
/// error identifier, and `errors`, field-level validation messages keyed by field name.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct ProblemDocument {
    /// Problem type URI; always `about:blank`.
    #[serde(rename = "type")]
    pub type_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase of the status.
    pub title: String,
    /// Human-readable explanation.
    pub detail: String,
    /// Machine-readable error identifier, e.g. `VALIDATION_FAILED`.
    pub code: String,
    /// Violation messages per field, in evaluation order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ProblemDocument {
    /// Creates a document with the given status and detail; title and code are left blank.
    pub fn new(status: u16, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_string(),
            status,
            title: String::new(),
            detail: detail.into(),
            code: String::new(),
            errors: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_errors(mut self, errors: BTreeMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }
}
