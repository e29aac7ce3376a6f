use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Regex for validating phone numbers
    /// Optional leading plus, then digits with single spaces, dashes or dots between groups
    /// - Valid: "5551234567", "+1 555-123-4567", "555.123.4567"
    /// - Invalid: "", "phone", "555--1234", "12"
    pub static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[0-9]{1,4}(?:[ .\-]?[0-9]{2,4}){1,5}$").unwrap();
}

/// Password rule for patches: empty means "keep the current password",
/// anything else must be a real password.
pub fn validate_new_password(password: &str) -> std::result::Result<(), ValidationError> {
    if password.is_empty() || password.chars().count() >= 8 {
        Ok(())
    } else {
        Err(ValidationError::new("length")
            .with_message("Password must be at least 8 characters".into()))
    }
}

/// Parse the `n` of a "last N" report: must be present and an integer.
///
/// Positivity is a business rule and is checked by the services.
pub fn parse_count(raw: Option<&str>) -> Result<i64> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter 'n' is required".to_string()))?;

    raw.parse::<i64>().map_err(|_| {
        AppError::BadRequest(format!(
            "Query parameter 'n' must be an integer, got '{}'",
            raw
        ))
    })
}

/// Reject `n <= 0` for the "last N" reports
pub fn ensure_positive_count(n: i64) -> Result<i64> {
    if n > 0 {
        Ok(n)
    } else {
        Err(AppError::BadRequest(format!(
            "Query parameter 'n' must be a positive integer, got {}",
            n
        )))
    }
}

/// Parse a numeric identifier taken from a path segment or query string
pub fn parse_id(field: &str, raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("{} must be numeric, got '{}'", field, raw)))
}

/// Same as [`parse_id`] for optional filters; absent means "no filter"
pub fn parse_optional_id(field: &str, raw: Option<&str>) -> Result<Option<i64>> {
    raw.map(|value| parse_id(field, value)).transpose()
}
