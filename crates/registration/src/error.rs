//! Internal failure types.
//!
//! None of these cross the public validator boundary: each validator turns a
//! [`RegistrationError`] into [`ValidationResult::ErrorException`] and hands its
//! `Display` text to the diagnostic sink.
//!
//! [`ValidationResult::ErrorException`]: crate::ValidationResult::ErrorException

/// An unexpected failure inside a validator or the display formatter.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistrationError {
    /// A built-in pattern failed to compile.
    #[error("pattern `{name}` failed to compile: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The date is not exactly eight ASCII digits.
    #[error("'{input}' does not match yyyyMMdd")]
    DateShape { input: String },

    /// The digits do not name a real calendar day.
    #[error("'{input}' is not a calendar date (year {year}, month {month}, day {day})")]
    DateOutOfRange {
        input: String,
        year: u16,
        month: u8,
        day: u8,
    },

    /// The display groups could not be cut out of the number.
    #[error("cannot split '{input}' into display groups")]
    Slice { input: String },
}

/// Returned when parsing an unknown [`ValidationResult`](crate::ValidationResult) tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation result code: {0}")]
pub struct UnknownResultCode(pub String);
