use regex::Regex;
use std::sync::LazyLock;

use crate::{
    model::debug::ValidationRequestDto,
    server::validation::{matches_pattern, not_blank, Validate, ValidationErrors},
};

/// `YYYY-MM-DD` with ASCII digits only; calendar validity is not checked.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is a valid regex")
});

pub const NAME_REQUIRED_MESSAGE: &str = "name is required";
pub const INVALID_DATE_MESSAGE: &str = "date format is invalid";

impl Validate for ValidationRequestDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        not_blank(
            &mut errors,
            "name",
            self.name.as_deref(),
            NAME_REQUIRED_MESSAGE,
        );
        matches_pattern(
            &mut errors,
            "expiryDate",
            self.expiry_date.as_deref(),
            &DATE_PATTERN,
            INVALID_DATE_MESSAGE,
        );

        errors.into_result()
    }
}
