//! Field sanitizers and validation rules for form submissions.
//!
//! Every text field goes through [`sanitize`] first. Each field then runs an
//! ordered list of rules; every rule runs and the failures are collected in a
//! [`FormErrors`] before the submission is accepted or rejected.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate};
use uuid::Uuid;
use validator::{ValidateLength, ValidationError};

/// A single rejected field, ready for display next to its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field errors of one submission, in the order the rules reported them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a rule run against `field`
    pub fn check(&mut self, field: &'static str, outcome: Result<(), ValidationError>) {
        if let Err(error) = outcome {
            self.push(field, error);
        }
    }

    /// Record a rule failure against `field`
    pub fn push(&mut self, field: &'static str, error: ValidationError) {
        let message = error
            .message
            .map(|m| m.into_owned())
            .unwrap_or_else(|| error.code.into_owned());
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Messages reported for one field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` when no rule failed
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// A rule failure carrying its display message
pub fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Trim surrounding whitespace and escape markup-significant characters
pub fn sanitize(raw: &str) -> String {
    escape(raw.trim())
}

/// HTML-escape `& < > " ' / \` and backtick
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if !value.validate_length(Some(1), None, None) {
        Err(rule_error("required", message))
    } else {
        Ok(())
    }
}

/// Length is counted in characters, not bytes
pub fn max_chars(value: &str, max: u64, message: &'static str) -> Result<(), ValidationError> {
    if !value.validate_length(None, Some(max), None) {
        Err(rule_error("length", message))
    } else {
        Ok(())
    }
}

/// ASCII letters and digits only. An empty value passes; emptiness is
/// [`required`]'s concern.
pub fn alphanumeric(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(rule_error("alphanumeric", message))
    }
}

/// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// An empty value is `Ok(None)`; anything else must be a calendar date
pub fn optional_date(value: &str, message: &'static str) -> Result<Option<NaiveDate>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_date(value)
        .map(Some)
        .ok_or_else(|| rule_error("date", message))
}

/// A reference to another record, submitted as its identifier
pub fn reference(value: &str, message: &'static str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| rule_error("reference", message))
}
