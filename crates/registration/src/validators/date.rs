//! Compact `YYYYMMDD` date validator.
//!
//! Two modes share the same empty and length gates:
//!
//! - **permissive** (default): passing the gates is enough, content is not parsed
//! - **disallow-future**: the untrimmed input must parse strictly and its local
//!   midnight must lie strictly before [`Clock::now`]

use chrono::{NaiveDate, NaiveTime};

use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::RegistrationError;
use crate::patterns::DATE_LENGTH;
use crate::result::ValidationResult;
use crate::validate::Validate;

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates compact dates such as `19900101`.
///
/// Checks, in order:
///
/// 1. trimmed input empty: [`ValidationResult::ErrorEmpty`]
/// 2. trimmed input shorter than 8 UTF-16 code units: [`ValidationResult::ErrorLength`]
/// 3. permissive mode: [`ValidationResult::Success`]
/// 4. disallow-future mode: the untrimmed input goes through
///    [`parse_compact_date`]. A parse failure is
///    [`ValidationResult::ErrorException`]; a midnight strictly before now is
///    [`ValidationResult::Success`]; anything else is
///    [`ValidationResult::ErrorDateIsFuture`].
///
/// Today's date is future only at the exact midnight instant; from the first
/// moment after midnight it is accepted.
///
/// # Examples
///
/// ```
/// use nebula_registration::{DateValidator, FixedClock, Validate, ValidationResult};
///
/// let clock = FixedClock::at_ymd_hms(2024, 6, 1, 9, 30, 0).unwrap();
/// let birthday = DateValidator::birthday().with_clock(clock);
///
/// assert_eq!(birthday.validate("19900101"), ValidationResult::Success);
/// assert_eq!(birthday.validate("20240601"), ValidationResult::Success);
/// assert_eq!(birthday.validate("20240602"), ValidationResult::ErrorDateIsFuture);
/// assert_eq!(birthday.validate("20240230"), ValidationResult::ErrorException);
///
/// // Permissive mode does not look at the content.
/// assert_eq!(DateValidator::any_date().validate("99999999"), ValidationResult::Success);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DateValidator<C = SystemClock, S = TracingSink> {
    disallow_future: bool,
    clock: C,
    sink: S,
}

impl DateValidator {
    /// Creates a permissive validator on the system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            disallow_future: false,
            clock: SystemClock,
            sink: TracingSink,
        }
    }

    /// Preset for birth dates: future dates are rejected.
    #[must_use]
    pub const fn birthday() -> Self {
        Self::new().disallow_future(true)
    }

    /// Preset for generic date entry: any date passing the length gate is accepted.
    #[must_use]
    pub const fn any_date() -> Self {
        Self::new()
    }
}

impl<C, S> DateValidator<C, S> {
    /// Toggles disallow-future mode.
    #[must_use = "builder methods must be chained or built"]
    pub const fn disallow_future(mut self, disallow: bool) -> Self {
        self.disallow_future = disallow;
        self
    }

    /// Replaces the time source.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_clock<T: Clock>(self, clock: T) -> DateValidator<T, S> {
        DateValidator {
            disallow_future: self.disallow_future,
            clock,
            sink: self.sink,
        }
    }

    /// Replaces the diagnostic sink.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> DateValidator<C, T> {
        DateValidator {
            disallow_future: self.disallow_future,
            clock: self.clock,
            sink,
        }
    }

    /// Whether future dates are rejected.
    pub const fn disallows_future(&self) -> bool {
        self.disallow_future
    }
}

impl<C: Clock, S: DiagnosticSink> Validate for DateValidator<C, S> {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        let trimmed = input.trim_matches(is_trimmable);

        if trimmed.is_empty() {
            return ValidationResult::ErrorEmpty;
        }

        if trimmed.encode_utf16().count() < DATE_LENGTH {
            return ValidationResult::ErrorLength;
        }

        if !self.disallow_future {
            return ValidationResult::Success;
        }

        // Gates read the trimmed text, the parser the untrimmed input.
        let outcome = parse_compact_date(input).map(|date| {
            if date.and_time(NaiveTime::MIN) < self.clock.now() {
                ValidationResult::Success
            } else {
                ValidationResult::ErrorDateIsFuture
            }
        });

        super::settle(&self.sink, "validate_date", outcome)
    }
}

/// Whitespace stripped before the gates: Unicode `White_Space` without NEL
/// (U+0085), plus the information separators U+001C..=U+001F.
fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || ('\u{1C}'..='\u{1F}').contains(&c)
}

// ============================================================================
// STRICT PARSER
// ============================================================================

/// Parses exactly eight ASCII digits as `YYYYMMDD`.
///
/// The calendar is not lenient: months must be `01..=12`, days must exist in
/// that month (February 29th only in leap years), and the year must be
/// `0001..=9999`. Signs, separators, whitespace and trailing characters are
/// all rejected.
///
/// # Examples
///
/// ```
/// use nebula_registration::parse_compact_date;
///
/// assert_eq!(parse_compact_date("20240229").unwrap().to_string(), "2024-02-29");
/// assert!(parse_compact_date("20230229").is_err());
/// assert!(parse_compact_date(" 20240101").is_err());
/// ```
pub fn parse_compact_date(input: &str) -> Result<NaiveDate, RegistrationError> {
    let bytes = input.as_bytes();
    let shape_error = || RegistrationError::DateShape {
        input: input.to_owned(),
    };

    if bytes.len() != DATE_LENGTH {
        return Err(shape_error());
    }

    let year = parse_digits(bytes, 0, 4).ok_or_else(shape_error)?;
    let month = parse_digits(bytes, 4, 2).ok_or_else(shape_error)?;
    let day = parse_digits(bytes, 6, 2).ok_or_else(shape_error)?;

    let out_of_range = || RegistrationError::DateOutOfRange {
        input: input.to_owned(),
        year,
        month: month as u8,
        day: day as u8,
    };

    if year == 0 {
        return Err(out_of_range());
    }

    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .ok_or_else(out_of_range)
}

/// Reads `width` ASCII digits starting at `offset`.
fn parse_digits(bytes: &[u8], offset: usize, width: usize) -> Option<u16> {
    bytes
        .get(offset..offset + width)?
        .iter()
        .try_fold(0u16, |acc, &b| {
            let digit = b.wrapping_sub(b'0');
            (digit <= 9).then(|| acc * 10 + u16::from(digit))
        })
}

// ============================================================================
// TESTS
// ============================================================================
