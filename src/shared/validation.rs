//! Field-level validation shared by all request DTOs.
//!
//! Rules are declared on the DTOs with `validator`; the resulting
//! `ValidationErrors` are flattened into [`FieldErrors`], which is what
//! clients receive in the `errors` member of a 400 response.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::error::AppError;

/// Key used when the request body itself is missing
pub const PAYLOAD_FIELD: &str = "payload";

/// Field name (as it appears on the wire) to one or more messages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok` when no errors were collected, otherwise a validation failure
    pub fn into_result(self) -> crate::core::error::Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let key = to_camel_case(&field);
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid.", key));
                out.add(key.clone(), message);
            }
        }
        out
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Unwrap a request body, failing with a single payload error when absent
pub fn require_payload<T>(
    payload: Option<T>,
    missing_message: &str,
) -> crate::core::error::Result<T> {
    payload.ok_or_else(|| AppError::Validation(FieldErrors::single(PAYLOAD_FIELD, missing_message)))
}

/// Run the declared field rules, collecting every violation
pub fn field_errors<T: Validate>(payload: &T) -> FieldErrors {
    payload.validate().err().map(FieldErrors::from).unwrap_or_default()
}

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub fn latitude(value: f64) -> Result<(), ValidationError> {
    within_bounds("Lat", value, -90.0, 90.0)
}

pub fn longitude(value: f64) -> Result<(), ValidationError> {
    within_bounds("Long", value, -180.0, 180.0)
}

// Inclusive on both ends, with a distinct message per direction.
fn within_bounds(label: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::new("range").with_message(Cow::Owned(format!(
            "{} cannot be greater than {}.",
            label, max
        ))));
    }
    if value < min {
        return Err(ValidationError::new("range").with_message(Cow::Owned(format!(
            "{} cannot be less than {}.",
            label, min
        ))));
    }
    Ok(())
}
