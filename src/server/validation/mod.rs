//! Explicit request validation.
//!
//! Each request shape implements [`Validate`] by running plain rule functions in a fixed
//! order. Violations are collected into [`ValidationErrors`] in evaluation order, which the
//! error translator later groups by field.

pub mod debug;

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// A single failed constraint on a request body field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// A failed constraint on a request parameter (query string or path variable).
///
/// `property_path` is `None` when the failing parameter cannot be identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub property_path: Option<String>,
    pub message: String,
}

/// Ordered list of field violations produced by a [`Validate`] implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "invalid fields [{}]", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation after any previously recorded ones.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Groups messages by field, keeping each field's messages in evaluation order.
    pub fn by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for violation in &self.violations {
            grouped
                .entry(violation.field.clone())
                .or_default()
                .push(violation.message.clone());
        }
        grouped
    }

    /// Converts the collected violations into a validation result.
    ///
    /// # Returns
    /// - `Ok(())` - No violations were recorded
    /// - `Err(ValidationErrors)` - At least one violation was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Validation rules for a request shape.
pub trait Validate {
    /// Evaluates every rule of the shape.
    ///
    /// All rules run even after a failure so the caller receives the complete list.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Fails when the value is absent, empty, or whitespace only.
pub fn not_blank(errors: &mut ValidationErrors, field: &str, value: Option<&str>, message: &str) {
    let blank = value.map(|v| v.trim().is_empty()).unwrap_or(true);
    if blank {
        errors.add(field, message);
    }
}

/// Fails when a present value does not match `pattern`; absent values pass.
pub fn matches_pattern(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    pattern: &Regex,
    message: &str,
) {
    if let Some(value) = value {
        if !pattern.is_match(value) {
            errors.add(field, message);
        }
    }
}
