//! Small input checks shared by the services.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::constants::MAX_AMOUNT;
use crate::errors::{Error, Result, ValidationError};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Returns the trimmed value, or a `MissingField` error when it is blank.
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    Ok(trimmed.to_string())
}

pub fn require_positive(field: &str, value: Decimal) -> Result<Decimal> {
    if value <= Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "{} must be greater than zero",
            field
        )));
    }
    require_within_limit(field, value)
}

pub fn require_non_negative(field: &str, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(Error::invalid_input(format!("{} cannot be negative", field)));
    }
    require_within_limit(field, value)
}

fn require_within_limit(field: &str, value: Decimal) -> Result<Decimal> {
    if value > Decimal::from(MAX_AMOUNT) {
        return Err(Error::invalid_input(format!(
            "{} cannot exceed {}",
            field, MAX_AMOUNT
        )));
    }
    Ok(value)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}
