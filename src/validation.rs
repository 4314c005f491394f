//! Field-level request validation.
//!
//! A [`Validator`] accumulates every violation instead of stopping at the first
//! one, so a request can report all of its problems at once. Requests that
//! carry required fields implement [`Validate`]; operations call
//! [`Validate::validate`] before anything reaches the network.

use std::collections::BTreeMap;
use std::fmt;

/// Accumulates named field violations. The first message recorded for a field wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no violation has been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a violation unless the field already has one.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Record a violation only if `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Convert the accumulated state into a result.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

/// Pre-flight failure carrying every violated field and its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: BTreeMap<String, String>,
}

impl ValidationError {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Message recorded for `field`, if it failed.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Requests with required fields.
pub trait Validate {
    /// Run every field check against `v`.
    fn check_fields(&self, v: &mut Validator);

    /// Run all checks against a fresh [`Validator`].
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.check_fields(&mut v);
        v.finish()
    }

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

pub(crate) fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}
