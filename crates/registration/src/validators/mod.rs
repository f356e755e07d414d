//! Rule objects for the three sign-up fields.
//!
//! - [`IdValidator`]: ASCII alphanumeric account identifiers
//! - [`MobileValidator`]: 11-digit national mobile numbers (`010[2-9]XXXXXXX`)
//! - [`DateValidator`]: compact `YYYYMMDD` dates, optionally rejecting the future
//!
//! Lengths are counted in UTF-16 code units, not bytes or characters.

pub mod date;
pub mod id;
pub mod mobile;

pub use date::{DateValidator, parse_compact_date};
pub use id::IdValidator;
pub use mobile::MobileValidator;

use crate::diagnostics::DiagnosticSink;
use crate::error::RegistrationError;
use crate::result::ValidationResult;

/// Collapses an internal failure into `ErrorException`, reporting it once.
pub(crate) fn settle<S: DiagnosticSink>(
    sink: &S,
    operation: &'static str,
    outcome: Result<ValidationResult, RegistrationError>,
) -> ValidationResult {
    outcome.unwrap_or_else(|err| {
        sink.emit(operation, &err.to_string());
        ValidationResult::ErrorException
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    #[test]
    fn settle_passes_results_through_silently() {
        let sink = MemorySink::new();
        let result = settle(&sink, "validate_id", Ok(ValidationResult::ErrorFail));
        assert_eq!(result, ValidationResult::ErrorFail);
        assert!(sink.is_empty());
    }

    #[test]
    fn settle_reports_failures_once() {
        let sink = MemorySink::new();
        let err = RegistrationError::DateShape {
            input: "2024-1-1".into(),
        };
        let result = settle(&sink, "validate_date", Err(err));
        assert_eq!(result, ValidationResult::ErrorException);
        assert_eq!(
            sink.lines(),
            vec!["validate_date: '2024-1-1' does not match yyyyMMdd".to_owned()]
        );
    }
}
