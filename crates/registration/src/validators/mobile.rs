//! National mobile number validator.

use regex::Regex;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::RegistrationError;
use crate::patterns::{self, MOBILE_LENGTH};
use crate::result::ValidationResult;
use crate::validate::Validate;

/// Accepts 11-digit numbers matching `010[2-9][0-9]{7}`.
///
/// Length is checked before content and counted in UTF-16 code units:
/// anything not exactly 11 units long is [`ValidationResult::ErrorLength`],
/// the empty string included. An 11-unit input that breaks the pattern is
/// [`ValidationResult::ErrorFail`].
///
/// # Examples
///
/// ```
/// use nebula_registration::{MobileValidator, Validate, ValidationResult};
///
/// let validator = MobileValidator::new();
/// assert_eq!(validator.validate("01023456789"), ValidationResult::Success);
/// assert_eq!(validator.validate("01012345678"), ValidationResult::ErrorFail);
/// assert_eq!(validator.validate(""), ValidationResult::ErrorLength);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileValidator<S = TracingSink> {
    sink: S,
}

impl MobileValidator {
    /// Creates a validator reporting through [`TracingSink`].
    #[must_use]
    pub const fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S> MobileValidator<S> {
    /// Replaces the diagnostic sink.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> MobileValidator<T> {
        MobileValidator { sink }
    }
}

impl<S: DiagnosticSink> Validate for MobileValidator<S> {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        super::settle(
            &self.sink,
            "validate_mobile",
            classify(input, patterns::mobile_regex()),
        )
    }
}

fn classify(
    input: &str,
    pattern: Result<&Regex, RegistrationError>,
) -> Result<ValidationResult, RegistrationError> {
    if input.encode_utf16().count() != MOBILE_LENGTH {
        return Ok(ValidationResult::ErrorLength);
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

    #[test]
    fn accepts_every_allowed_fourth_digit() {
        let v = MobileValidator::new();
        for fourth in '2'..='9' {
            let number = format!("010{fourth}1234567");
            assert_eq!(v.validate(&number), ValidationResult::Success, "{number}");
        }
    }

    #[test]
    fn reserved_fourth_digits_fail() {
        let v = MobileValidator::new();
        assert_eq!(v.validate("01012345678"), ValidationResult::ErrorFail);
        assert_eq!(v.validate("01002345678"), ValidationResult::ErrorFail);
    }

    #[test]
    fn wrong_prefix_fails() {
        let v = MobileValidator::new();
        assert_eq!(v.validate("01123456789"), ValidationResult::ErrorFail);
        assert_eq!(v.validate("11023456789"), ValidationResult::ErrorFail);
        assert_eq!(v.validate("02023456789"), ValidationResult::ErrorFail);
    }

    #[test]
    fn non_digits_in_body_fail() {
        let v = MobileValidator::new();
        assert_eq!(v.validate("0102345678a"), ValidationResult::ErrorFail);
        assert_eq!(v.validate("010-2345678"), ValidationResult::ErrorFail);
        assert_eq!(v.validate("abcdefghijk"), ValidationResult::ErrorFail);
        assert_eq!(v.validate("0102345678가"), ValidationResult::ErrorFail);
    }

    #[test]
    fn length_is_checked_before_content() {
        let v = MobileValidator::new();
        assert_eq!(v.validate(""), ValidationResult::ErrorLength);
        assert_eq!(v.validate("0102345678"), ValidationResult::ErrorLength);
        assert_eq!(v.validate("010234567890"), ValidationResult::ErrorLength);
        assert_eq!(v.validate("abcdefghij"), ValidationResult::ErrorLength);
        assert_eq!(v.validate("010-2345-6789"), ValidationResult::ErrorLength);
    }

    #[test]
    fn length_counts_utf16_units() {
        let v = MobileValidator::new();
        // 10 digits + one astral char = 12 units
        assert_eq!(v.validate("0102345678\u{1F600}"), ValidationResult::ErrorLength);
        // 9 digits + one astral char = 11 units
        assert_eq!(v.validate("010234567\u{1F600}"), ValidationResult::ErrorFail);
        assert_eq!(v.validate("0102345678가"), ValidationResult::ErrorFail);
    }

    #[test]
    fn broken_pattern_only_matters_at_full_length() {
        let source = Regex::new("[").unwrap_err();
        let broken = || RegistrationError::Pattern {
            name: "mobile",
            source: source.clone(),
        };

        assert!(matches!(
            classify("0102", Err(broken())),
            Ok(ValidationResult::ErrorLength)
        ));

        let sink = MemorySink::new();
        let outcome = classify("01023456789", Err(broken()));
        assert_eq!(
            super::super::settle(&sink, "validate_mobile", outcome),
            ValidationResult::ErrorException
        );
        assert_eq!(sink.len(), 1);
    }
}
