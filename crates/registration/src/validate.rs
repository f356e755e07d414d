//! The trait every rule object implements.

use crate::result::ValidationResult;

/// Classifies an input into exactly one [`ValidationResult`].
///
/// Implementations are total: they never panic and never return an error
/// type. Internal failures come back as [`ValidationResult::ErrorException`].
///
/// # Examples
///
/// ```
/// use nebula_registration::{MobileValidator, Validate, ValidationResult};
///
/// let validator = MobileValidator::new();
/// assert_eq!(validator.validate("01023456789"), ValidationResult::Success);
/// assert!(!validator.is_valid("01012345678"));
/// ```
pub trait Validate {
    /// The type being validated. `?Sized` so rules can take `str` directly.
    type Input: ?Sized;

    /// Classifies `input`.
    fn validate(&self, input: &Self::Input) -> ValidationResult;

    /// Shorthand for `validate(input).is_success()`.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_success()
    }
}
