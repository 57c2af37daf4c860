//! Registry of recognized HTTP status codes.
//!
//! `http::StatusCode` accepts any number in `100..=999`, so it cannot answer whether a code is
//! a *known* status. This table lists the statuses the API recognizes together with their
//! symbolic names (used as machine-readable problem codes) and reason phrases (used as problem
//! titles).

use axum::http::StatusCode;

/// A recognized HTTP status with its symbolic name and standard reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownStatus {
    /// Numeric status code.
    pub code: u16,
    /// Upper snake case name, e.g. `UNPROCESSABLE_ENTITY`.
    pub name: &'static str,
    /// Reason phrase, e.g. `Unprocessable Entity`.
    pub reason: &'static str,
}

const fn status(code: u16, name: &'static str, reason: &'static str) -> KnownStatus {
    KnownStatus { code, name, reason }
}

/// Sorted by code; each code appears once.
///
/// Deprecated statuses that still resolve (305, 419-421) are included. Where a code has a
/// deprecated alias (302, 413, 414), the current name is used.
const KNOWN_STATUSES: &[KnownStatus] = &[
    status(100, "CONTINUE", "Continue"),
    status(101, "SWITCHING_PROTOCOLS", "Switching Protocols"),
    status(102, "PROCESSING", "Processing"),
    status(103, "EARLY_HINTS", "Early Hints"),
    status(200, "OK", "OK"),
    status(201, "CREATED", "Created"),
    status(202, "ACCEPTED", "Accepted"),
    status(203, "NON_AUTHORITATIVE_INFORMATION", "Non-Authoritative Information"),
    status(204, "NO_CONTENT", "No Content"),
    status(205, "RESET_CONTENT", "Reset Content"),
    status(206, "PARTIAL_CONTENT", "Partial Content"),
    status(207, "MULTI_STATUS", "Multi-Status"),
    status(208, "ALREADY_REPORTED", "Already Reported"),
    status(226, "IM_USED", "IM Used"),
    status(300, "MULTIPLE_CHOICES", "Multiple Choices"),
    status(301, "MOVED_PERMANENTLY", "Moved Permanently"),
    status(302, "FOUND", "Found"),
    status(303, "SEE_OTHER", "See Other"),
    status(304, "NOT_MODIFIED", "Not Modified"),
    status(305, "USE_PROXY", "Use Proxy"),
    status(307, "TEMPORARY_REDIRECT", "Temporary Redirect"),
    status(308, "PERMANENT_REDIRECT", "Permanent Redirect"),
    status(400, "BAD_REQUEST", "Bad Request"),
    status(401, "UNAUTHORIZED", "Unauthorized"),
    status(402, "PAYMENT_REQUIRED", "Payment Required"),
    status(403, "FORBIDDEN", "Forbidden"),
    status(404, "NOT_FOUND", "Not Found"),
    status(405, "METHOD_NOT_ALLOWED", "Method Not Allowed"),
    status(406, "NOT_ACCEPTABLE", "Not Acceptable"),
    status(407, "PROXY_AUTHENTICATION_REQUIRED", "Proxy Authentication Required"),
    status(408, "REQUEST_TIMEOUT", "Request Timeout"),
    status(409, "CONFLICT", "Conflict"),
    status(410, "GONE", "Gone"),
    status(411, "LENGTH_REQUIRED", "Length Required"),
    status(412, "PRECONDITION_FAILED", "Precondition Failed"),
    status(413, "PAYLOAD_TOO_LARGE", "Payload Too Large"),
    status(414, "URI_TOO_LONG", "URI Too Long"),
    status(415, "UNSUPPORTED_MEDIA_TYPE", "Unsupported Media Type"),
    status(416, "REQUESTED_RANGE_NOT_SATISFIABLE", "Requested range not satisfiable"),
    status(417, "EXPECTATION_FAILED", "Expectation Failed"),
    status(418, "I_AM_A_TEAPOT", "I'm a teapot"),
    status(419, "INSUFFICIENT_SPACE_ON_RESOURCE", "Insufficient Space On Resource"),
    status(420, "METHOD_FAILURE", "Method Failure"),
    status(421, "DESTINATION_LOCKED", "Destination Locked"),
    status(422, "UNPROCESSABLE_ENTITY", "Unprocessable Entity"),
    status(423, "LOCKED", "Locked"),
    status(424, "FAILED_DEPENDENCY", "Failed Dependency"),
    status(425, "TOO_EARLY", "Too Early"),
    status(426, "UPGRADE_REQUIRED", "Upgrade Required"),
    status(428, "PRECONDITION_REQUIRED", "Precondition Required"),
    status(429, "TOO_MANY_REQUESTS", "Too Many Requests"),
    status(431, "REQUEST_HEADER_FIELDS_TOO_LARGE", "Request Header Fields Too Large"),
    status(451, "UNAVAILABLE_FOR_LEGAL_REASONS", "Unavailable For Legal Reasons"),
    status(500, "INTERNAL_SERVER_ERROR", "Internal Server Error"),
    status(501, "NOT_IMPLEMENTED", "Not Implemented"),
    status(502, "BAD_GATEWAY", "Bad Gateway"),
    status(503, "SERVICE_UNAVAILABLE", "Service Unavailable"),
    status(504, "GATEWAY_TIMEOUT", "Gateway Timeout"),
    status(505, "HTTP_VERSION_NOT_SUPPORTED", "HTTP Version not supported"),
    status(506, "VARIANT_ALSO_NEGOTIATES", "Variant Also Negotiates"),
    status(507, "INSUFFICIENT_STORAGE", "Insufficient Storage"),
    status(508, "LOOP_DETECTED", "Loop Detected"),
    status(509, "BANDWIDTH_LIMIT_EXCEEDED", "Bandwidth Limit Exceeded"),
    status(510, "NOT_EXTENDED", "Not Extended"),
    status(511, "NETWORK_AUTHENTICATION_REQUIRED", "Network Authentication Required"),
];

impl KnownStatus {
    pub const BAD_REQUEST: KnownStatus = status(400, "BAD_REQUEST", "Bad Request");
    pub const NOT_FOUND: KnownStatus = status(404, "NOT_FOUND", "Not Found");
    pub const METHOD_NOT_ALLOWED: KnownStatus =
        status(405, "METHOD_NOT_ALLOWED", "Method Not Allowed");
    pub const UNSUPPORTED_MEDIA_TYPE: KnownStatus =
        status(415, "UNSUPPORTED_MEDIA_TYPE", "Unsupported Media Type");
    pub const UNPROCESSABLE_ENTITY: KnownStatus =
        status(422, "UNPROCESSABLE_ENTITY", "Unprocessable Entity");
    pub const INTERNAL_SERVER_ERROR: KnownStatus =
        status(500, "INTERNAL_SERVER_ERROR", "Internal Server Error");

    /// Looks up a recognized status by its numeric code.
    ///
    /// Accepts any integer so that negative or oversized values coming from user input simply
    /// fail to resolve.
    ///
    /// # Returns
    /// - `Some(KnownStatus)` - The code is a recognized status
    /// - `None` - The code is not in the registry
    pub fn resolve(code: i64) -> Option<KnownStatus> {
        let code = u16::try_from(code).ok()?;
        KNOWN_STATUSES
            .binary_search_by_key(&code, |s| s.code)
            .ok()
            .map(|idx| KNOWN_STATUSES[idx])
    }

    /// Converts into the `http` crate's status type.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Iterates every recognized status in ascending code order.
    pub fn all() -> impl Iterator<Item = KnownStatus> {
        KNOWN_STATUSES.iter().copied()
    }
}

/// Human-readable label for a status code, e.g. `"404 NOT_FOUND"`.
///
/// Falls back to the bare number for codes outside the registry.
pub fn status_label(code: u16) -> String {
    match KnownStatus::resolve(code.into()) {
        Some(known) => format!("{} {}", known.code, known.name),
        None => code.to_string(),
    }
}
