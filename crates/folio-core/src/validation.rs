//! Per-field validation error aggregation.
//!
//! Handlers collect every problem with an inbound payload before failing,
//! so a response names all offending fields at once rather than the first
//! one encountered. Serializes as `{ "field": ["message", ...], ... }`.

use std::collections::BTreeMap;

use serde::Serialize;

/// Message used when a required field is missing from the payload.
pub const REQUIRED: &str = "This field is required.";
/// Message used when a field cannot be parsed as an integer.
pub const INVALID_INTEGER: &str = "A valid integer is required.";
/// Message used when a field is not a well-formed URL.
pub const INVALID_URL: &str = "Enter a valid URL.";
/// Message used when a field is not a well-formed email address.
pub const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Ordered map of field name to the list of messages raised for it.
///
/// BTreeMap keeps the serialized output deterministic, which the HTTP
/// tests rely on.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field. Repeated calls append.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// Mark a field as missing with the standard required-field message.
    pub fn require(&mut self, field: &str) {
        self.add(field, REQUIRED);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the accumulated errors, returning `Err` if any were recorded.
    pub fn into_result(self) -> Result<(), crate::error::CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(crate::error::CoreError::Validation(self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_pass() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_messages_accumulate_per_field() {
        let mut errors = FieldErrors::new();
        errors.require("school");
        errors.add("ordinal", INVALID_INTEGER);
        errors.add("ordinal", "Must be positive.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["school"][0], REQUIRED);
        assert_eq!(json["ordinal"][0], INVALID_INTEGER);
        assert_eq!(json["ordinal"][1], "Must be positive.");
    }

    #[test]
    fn test_into_result_fails_when_nonempty() {
        let mut errors = FieldErrors::new();
        errors.require("image");
        assert!(errors.into_result().is_err());
    }
}
