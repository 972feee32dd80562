//! Shared field rules used by the form schemas.
//!
//! Every helper here is pure: same input, same outcome, no I/O. Helpers that
//! can fail return a [`ValidationError`] carrying a stable reason code, so
//! callers aggregate problems instead of bailing on the first one.

use std::borrow::Cow;
use std::sync::OnceLock;

use chrono::{Datelike, Local};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;
use validator::{ValidationError, ValidationErrors};

pub(crate) fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub(crate) fn collect(outcome: Result<(), ValidationErrors>) -> ValidationErrors {
    match outcome {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    }
}

/// The calendar year at the moment of validation. Year bounds that depend on
/// it must call this at validation time, never cache it.
pub(crate) fn current_year() -> i32 {
    Local::now().year()
}

/// Absolute URL rule: scheme and host required, empty input left to the
/// field's own required/optional rule.
pub(crate) fn absolute_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    match Url::parse(value) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        _ => Err(violation(
            "invalid_url",
            "enter a full URL including the scheme, e.g. https://example.com",
        )),
    }
}

/// Permissive URL rule for publication links: bare domains are accepted.
pub(crate) fn lenient_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^(https?://)?([A-Za-z0-9-]+\.)+[A-Za-z]{2,}(:\d+)?(/\S*)?$")
            .expect("publication URL pattern compiles")
    });

    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(violation("invalid_url", "enter a web address"))
    }
}

/// Literal-true consent rule for terms checkboxes.
pub(crate) fn accepted(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(violation("must_accept", "the terms must be accepted"))
    }
}

/// Length rule with both bounds, reporting `too_short`/`too_long` distinctly.
pub(crate) fn bounded(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let length = value.chars().count();
    if length < min {
        errors.add(field, violation("too_short", "value is too short"));
    } else if length > max {
        errors.add(field, violation("too_long", "value is too long"));
    }
}

/// Categorical rule: the value must be a non-empty member of `allowed`.
pub(crate) fn selection(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    allowed: &[String],
) {
    if value.is_empty() {
        errors.add(field, violation("too_short", "a selection is required"));
    } else if !allowed.iter().any(|option| option == value) {
        errors.add(
            field,
            violation("invalid_choice", "value is not one of the allowed options"),
        );
    }
}

/// Inclusive numeric window, for year fields with runtime bounds.
pub(crate) fn year_range(
    errors: &mut ValidationErrors,
    field: &'static str,
    year: i32,
    min: i32,
    max: i32,
) {
    if year < min || year > max {
        errors.add(field, violation("out_of_range", "year is out of range"));
    }
}

/// Age input accepted either as a number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    Number(i64),
    Text(String),
}

impl AgeValue {
    /// Coerce to whole years; numeric strings parse, anything else is `None`.
    pub fn as_years(&self) -> Option<i64> {
        match self {
            AgeValue::Number(value) => Some(*value),
            AgeValue::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Input-boundary rule: an empty or blank string means "absent".
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}
