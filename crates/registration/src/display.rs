//! Hyphenated display form for mobile numbers.

use std::borrow::Cow;
use std::fmt;

use crate::diagnostics::DiagnosticSink;
use crate::error::RegistrationError;
use crate::validate::Validate;
use crate::validators::MobileValidator;

/// Length of the `DDD-DDDD-DDDD` display form.
pub const DISPLAY_MOBILE_LENGTH: usize = 13;

/// Renders a valid mobile number as `DDD-DDDD-DDDD`.
///
/// Input that does not validate is returned unchanged and borrowed. A
/// failure while cutting the groups is reported to `sink` and also falls back
/// to the unchanged input.
///
/// # Examples
///
/// ```
/// use nebula_registration::{SilentSink, display_mobile_with};
///
/// assert_eq!(display_mobile_with("01023456789", &SilentSink), "010-2345-6789");
/// assert_eq!(display_mobile_with("abc", &SilentSink), "abc");
/// ```
pub fn display_mobile_with<'a, S: DiagnosticSink>(mobile: &'a str, sink: &S) -> Cow<'a, str> {
    if !MobileValidator::new().with_sink(sink).is_valid(mobile) {
        return Cow::Borrowed(mobile);
    }

    match groups(mobile) {
        Ok((head, middle, tail)) => Cow::Owned(format!("{head}-{middle}-{tail}")),
        Err(err) => {
            sink.emit("display_mobile", &err.to_string());
            Cow::Borrowed(mobile)
        }
    }
}

fn groups(mobile: &str) -> Result<(&str, &str, &str), RegistrationError> {
    let slice_error = || RegistrationError::Slice {
        input: mobile.to_owned(),
    };
    Ok((
        mobile.get(0..3).ok_or_else(slice_error)?,
        mobile.get(3..7).ok_or_else(slice_error)?,
        mobile.get(7..11).ok_or_else(slice_error)?,
    ))
}

// ============================================================================
// MOBILE DISPLAY
// ============================================================================

/// Writes the display form straight into a formatter.
///
/// Same rules as [`display_mobile_with`], without the intermediate `String`.
///
/// ```
/// use nebula_registration::MobileDisplay;
///
/// assert_eq!(format!("tel: {}", MobileDisplay::new("01023456789")), "tel: 010-2345-6789");
/// assert_eq!(MobileDisplay::new("0101").to_string(), "0101");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MobileDisplay<'a> {
    mobile: &'a str,
}

impl<'a> MobileDisplay<'a> {
    /// Wraps `mobile` for display.
    #[must_use]
    pub const fn new(mobile: &'a str) -> Self {
        Self { mobile }
    }
}

impl fmt::Display for MobileDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if MobileValidator::new().is_valid(self.mobile) {
            if let Ok((head, middle, tail)) = groups(self.mobile) {
                return write!(f, "{head}-{middle}-{tail}");
            }
        }
        f.write_str(self.mobile)
    }
}
