//! The façade bundling a clock and a diagnostic sink.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::display::display_mobile_with;
use crate::result::ValidationResult;
use crate::validate::Validate;
use crate::validators::{DateValidator, IdValidator, MobileValidator};

// ============================================================================
// REGISTRATION
// ============================================================================

/// Entry point for the four registration operations.
///
/// Holds the collaborators the rules need: a [`Clock`] for disallow-future
/// dates and a [`DiagnosticSink`] for internal failures. Both are swappable.
///
/// # Examples
///
/// ```
/// use nebula_registration::{FixedClock, Registration, SilentSink, ValidationResult};
///
/// let registration = Registration::new()
///     .with_clock(FixedClock::at_ymd_hms(2024, 1, 1, 0, 0, 0).unwrap())
///     .with_sink(SilentSink);
///
/// assert_eq!(registration.validate_id("Abc123"), ValidationResult::Success);
/// assert_eq!(registration.validate_mobile("01023456789"), ValidationResult::Success);
/// assert_eq!(registration.validate_date("20240102", true), ValidationResult::ErrorDateIsFuture);
/// assert_eq!(registration.display_mobile("01023456789"), "010-2345-6789");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Registration<C = SystemClock, S = TracingSink> {
    clock: C,
    sink: S,
}

impl Registration {
    /// System clock, tracing diagnostics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clock: SystemClock,
            sink: TracingSink,
        }
    }
}

impl<C, S> Registration<C, S> {
    /// Replaces the time source.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_clock<T: Clock>(self, clock: T) -> Registration<T, S> {
        Registration {
            clock,
            sink: self.sink,
        }
    }

    /// Replaces the diagnostic sink.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> Registration<C, T> {
        Registration {
            clock: self.clock,
            sink,
        }
    }

    /// The configured time source.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The configured diagnostic sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

impl<C: Clock, S: DiagnosticSink> Registration<C, S> {
    /// Validates an account identifier. See [`IdValidator`].
    pub fn validate_id(&self, id: &str) -> ValidationResult {
        IdValidator::new().with_sink(&self.sink).validate(id)
    }

    /// Validates a national mobile number. See [`MobileValidator`].
    pub fn validate_mobile(&self, mobile: &str) -> ValidationResult {
        MobileValidator::new().with_sink(&self.sink).validate(mobile)
    }

    /// Validates a compact `YYYYMMDD` date. See [`DateValidator`].
    pub fn validate_date(&self, date: &str, disallow_future: bool) -> ValidationResult {
        DateValidator::new()
            .disallow_future(disallow_future)
            .with_clock(&self.clock)
            .with_sink(&self.sink)
            .validate(date)
    }

    /// Renders a valid mobile number as `DDD-DDDD-DDDD`, anything else unchanged.
    pub fn display_mobile<'a>(&self, mobile: &'a str) -> Cow<'a, str> {
        display_mobile_with(mobile, &self.sink)
    }
}

// ============================================================================
// FORM
// ============================================================================

/// The three fields of a sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub id: String,
    pub mobile: String,
    pub birth_date: String,
}

impl RegistrationForm {
    /// Validates every field; the birth date may not lie in the future.
    pub fn validate<C: Clock, S: DiagnosticSink>(
        &self,
        registration: &Registration<C, S>,
    ) -> FormReport {
        FormReport {
            id: registration.validate_id(&self.id),
            mobile: registration.validate_mobile(&self.mobile),
            birth_date: registration.validate_date(&self.birth_date, true),
        }
    }
}

/// Per-field outcome of [`RegistrationForm::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    pub id: ValidationResult,
    pub mobile: ValidationResult,
    pub birth_date: ValidationResult,
}

impl FormReport {
    /// Whether every field passed.
    pub const fn is_valid(&self) -> bool {
        self.id.is_success() && self.mobile.is_success() && self.birth_date.is_success()
    }

    /// Failing fields with their results, in form order.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, ValidationResult)> {
        [
            ("id", self.id),
            ("mobile", self.mobile),
            ("birth_date", self.birth_date),
        ]
        .into_iter()
        .filter(|(_, result)| result.is_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::diagnostics::MemorySink;

    fn frozen() -> Registration<FixedClock, MemorySink> {
        Registration::new()
            .with_clock(FixedClock::at_ymd_hms(2024, 6, 1, 12, 0, 0).unwrap())
            .with_sink(MemorySink::new())
    }

    #[test]
    fn delegates_to_rules() {
        let r = frozen();
        assert_eq!(r.validate_id(""), ValidationResult::ErrorEmpty);
        assert_eq!(r.validate_mobile("0102345678"), ValidationResult::ErrorLength);
        assert_eq!(r.validate_date("19900101", true), ValidationResult::Success);
        assert_eq!(r.validate_date("20240602", true), ValidationResult::ErrorDateIsFuture);
        assert_eq!(r.validate_date("99999999", false), ValidationResult::Success);
        assert_eq!(r.display_mobile("abc"), "abc");
        assert!(r.sink().is_empty());
    }

    #[test]
    fn exceptions_reach_the_configured_sink() {
        let r = frozen();
        assert_eq!(r.validate_date("20240230", true), ValidationResult::ErrorException);
        assert_eq!(r.sink().len(), 1);
    }

    #[test]
    fn form_report() {
        let r = frozen();
        let form = RegistrationForm {
            id: "alice_01".into(),
            mobile: "01023456789".into(),
            birth_date: "20300101".into(),
        };

        let report = form.validate(&r);
        assert!(!report.is_valid());
        assert_eq!(
            report.failures().collect::<Vec<_>>(),
            vec![
                ("id", ValidationResult::ErrorFail),
                ("birth_date", ValidationResult::ErrorDateIsFuture),
            ]
        );

        let fixed = RegistrationForm {
            id: "alice01".into(),
            birth_date: "19900101".into(),
            ..form
        };
        let report = fixed.validate(&r);
        assert!(report.is_valid());
        assert_eq!(report.failures().count(), 0);
    }
}
