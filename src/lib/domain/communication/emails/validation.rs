//! Structured validation errors

use std::fmt;

/// A single rejected field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the field, e.g. `from.email` or `attachments[0].size`
    pub field: String,

    /// Human-readable reason
    pub reason: String,
}

/// Every field rejected while validating one input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty error list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected field
    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            reason: reason.into(),
        });
    }

    /// Unwrap `result`, recording its error against `field` on failure
    pub fn check<T, E: fmt::Display>(
        &mut self,
        field: impl Into<String>,
        result: Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.add(field, err.to_string());
                None
            }
        }
    }

    /// Whether no field was rejected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The rejected fields, in the order they were checked
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// `Ok(value)` when nothing was rejected, otherwise `Err(self)`
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons = self
            .0
            .iter()
            .map(|error| format!("{}: {}", error.field, error.reason))
            .collect::<Vec<_>>();

        write!(f, "{}", reasons.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for Vec<FieldError> {
    fn from(errors: ValidationErrors) -> Self {
        errors.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_records_errors() {
        let mut errors = ValidationErrors::new();

        let ok = errors.check("a", Ok::<_, String>(1));
        let failed = errors.check("b", Err::<i32, _>("bad value"));

        assert_eq!(ok, Some(1));
        assert_eq!(failed, None);
        assert_eq!(
            errors.errors(),
            &[FieldError {
                field: "b".to_string(),
                reason: "bad value".to_string()
            }]
        );
    }

    #[test]
    fn test_display_lists_every_field() {
        let mut errors = ValidationErrors::new();
        errors.add("limit", "too small");
        errors.add("offset", "negative");

        assert_eq!(errors.to_string(), "limit: too small; offset: negative");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(3), Ok(3));

        let mut errors = ValidationErrors::new();
        errors.add("id", "nope");

        assert!(errors.into_result(3).is_err());
    }
}
