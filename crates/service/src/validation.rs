//! Request validation.
//!
//! Request structs derive [`validator::Validate`]; [`validate`] turns the
//! validator's error tree into a flat, field-sorted [`Violations`] list so a
//! response reports every broken constraint at once.

use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self { Self::default() }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut v = Self::new();
        v.push(field, message);
        v
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation { field: field.into(), message: message.into() });
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> { self.0.iter() }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    fn sort(&mut self) {
        self.0.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl From<ValidationErrors> for Violations {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = Violations::new();
        for (field, errs) in errors.field_errors() {
            for e in errs.iter() {
                out.push(field.to_string(), describe(e));
            }
        }
        out.sort();
        out
    }
}

fn describe(e: &ValidationError) -> String {
    match &e.message {
        Some(m) => m.to_string(),
        None => format!("is invalid ({})", e.code),
    }
}

/// Run the derived checks of `input`.
pub fn validate<T: Validate>(input: &T) -> Result<(), ServiceError> {
    input.validate().map_err(|e| ServiceError::Validation(e.into()))
}
