//! # nebula-registration
//!
//! Validation for the three fields of a sign-up form: an account identifier,
//! a national mobile number and a compact `YYYYMMDD` date, plus the
//! hyphenated display form of a mobile number.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_registration::{ValidationResult, display_mobile, validate_date, validate_id, validate_mobile};
//!
//! assert_eq!(validate_id("Abc123"), ValidationResult::Success);
//! assert_eq!(validate_mobile("01023456789"), ValidationResult::Success);
//! assert_eq!(validate_mobile("0102345678"), ValidationResult::ErrorLength);
//! assert_eq!(validate_date("19900101", true), ValidationResult::Success);
//! assert_eq!(display_mobile("01023456789"), "010-2345-6789");
//! ```
//!
//! ## Collaborators
//!
//! The free functions use the system clock and report internal failures to
//! `tracing`. Build a [`Registration`] to freeze time with a [`FixedClock`]
//! or capture diagnostics with a [`MemorySink`].
//!
//! Every operation is total: outcomes are [`ValidationResult`] values, never
//! panics or errors.

pub mod clock;
pub mod diagnostics;
pub mod display;
pub mod error;
pub mod patterns;
pub mod registration;
pub mod result;
pub mod validate;
pub mod validators;

pub use clock::{Clock, FixedClock, SystemClock};
pub use diagnostics::{DiagnosticSink, MemorySink, SilentSink, TracingSink};
pub use display::{DISPLAY_MOBILE_LENGTH, MobileDisplay, display_mobile_with};
pub use error::{RegistrationError, UnknownResultCode};
pub use patterns::{DATE_LENGTH, MOBILE_LENGTH};
pub use registration::{FormReport, Registration, RegistrationForm};
pub use result::ValidationResult;
pub use validate::Validate;
pub use validators::{DateValidator, IdValidator, MobileValidator, parse_compact_date};

static DEFAULT: Registration = Registration::new();

/// Validates an account identifier: non-empty, ASCII letters and digits only.
pub fn validate_id(id: &str) -> ValidationResult {
    DEFAULT.validate_id(id)
}

/// Validates an 11-digit national mobile number (`010[2-9]` + seven digits).
pub fn validate_mobile(mobile: &str) -> ValidationResult {
    DEFAULT.validate_mobile(mobile)
}

/// Validates a compact `YYYYMMDD` date against the local wall clock.
///
/// With `disallow_future == false` only the empty and length gates apply.
pub fn validate_date(date: &str, disallow_future: bool) -> ValidationResult {
    DEFAULT.validate_date(date, disallow_future)
}

/// Returns `DDD-DDDD-DDDD` for a valid mobile number, the input otherwise.
pub fn display_mobile(mobile: &str) -> String {
    DEFAULT.display_mobile(mobile).into_owned()
}
