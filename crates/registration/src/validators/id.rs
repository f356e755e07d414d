//! Account identifier validator.

use regex::Regex;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::RegistrationError;
use crate::patterns;
use crate::result::ValidationResult;
use crate::validate::Validate;

/// Accepts non-empty identifiers made only of `[A-Za-z0-9]`.
///
/// No trimming and no maximum length. Whitespace and non-ASCII letters are
/// rejected with [`ValidationResult::ErrorFail`].
///
/// # Examples
///
/// ```
/// use nebula_registration::{IdValidator, Validate, ValidationResult};
///
/// let validator = IdValidator::new();
/// assert_eq!(validator.validate("Abc123"), ValidationResult::Success);
/// assert_eq!(validator.validate(""), ValidationResult::ErrorEmpty);
/// assert_eq!(validator.validate("abc_123"), ValidationResult::ErrorFail);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IdValidator<S = TracingSink> {
    sink: S,
}

impl IdValidator {
    /// Creates a validator reporting through [`TracingSink`].
    #[must_use]
    pub const fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S> IdValidator<S> {
    /// Replaces the diagnostic sink.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> IdValidator<T> {
        IdValidator { sink }
    }
}

impl<S: DiagnosticSink> Validate for IdValidator<S> {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        super::settle(&self.sink, "validate_id", classify(input, patterns::id_regex()))
    }
}

fn classify(
    input: &str,
    pattern: Result<&Regex, RegistrationError>,
) -> Result<ValidationResult, RegistrationError> {
    if input.is_empty() {
        return Ok(ValidationResult::ErrorEmpty);
    }

    if pattern?.is_match(input) {
        Ok(ValidationResult::Success)
    } else {
        Ok(ValidationResult::ErrorFail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    fn broken_pattern() -> RegistrationError {
        RegistrationError::Pattern {
            name: "id",
            source: Regex::new("(").unwrap_err(),
        }
    }

    #[test]
    fn accepts_ascii_alphanumerics() {
        let v = IdValidator::new();
        assert_eq!(v.validate("Abc123"), ValidationResult::Success);
        assert_eq!(v.validate("a"), ValidationResult::Success);
        assert_eq!(v.validate("7"), ValidationResult::Success);
        assert_eq!(v.validate(&"x".repeat(4096)), ValidationResult::Success);
    }

    #[test]
    fn empty_is_not_trimmed() {
        let v = IdValidator::new();
        assert_eq!(v.validate(""), ValidationResult::ErrorEmpty);
        assert_eq!(v.validate(" "), ValidationResult::ErrorFail);
        assert_eq!(v.validate("\t\n"), ValidationResult::ErrorFail);
    }

    #[test]
    fn rejects_symbols_and_unicode() {
        let v = IdValidator::new();
        for input in ["abc_123", "abc-123", "abc 123", "abc\n", "café", "사용자", "ｆｕｌｌ"] {
            assert_eq!(v.validate(input), ValidationResult::ErrorFail, "{input:?}");
        }
    }

    #[test]
    fn broken_pattern_becomes_exception() {
        let sink = MemorySink::new();
        let outcome = classify("abc", Err(broken_pattern()));
        assert_eq!(
            super::super::settle(&sink, "validate_id", outcome),
            ValidationResult::ErrorException
        );
        assert_eq!(sink.len(), 1);
        assert!(sink.lines()[0].starts_with("validate_id: pattern `id` failed to compile"));
    }

    #[test]
    fn empty_wins_over_broken_pattern() {
        assert!(matches!(
            classify("", Err(broken_pattern())),
            Ok(ValidationResult::ErrorEmpty)
        ));
    }

    #[test]
    fn healthy_validator_stays_quiet() {
        let sink = MemorySink::new();
        let v = IdValidator::new().with_sink(&sink);
        v.validate("");
        v.validate("bad id");
        v.validate("good1");
        assert!(sink.is_empty());
    }
}
