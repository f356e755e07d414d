//! The validation outcome taxonomy.
//!
//! Every validator in this crate answers with exactly one [`ValidationResult`].
//! The set of variants is closed: callers map each one to their own UI message.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownResultCode;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Outcome of a single validation call.
///
/// The serialized form uses the upper snake case tags (`"SUCCESS"`,
/// `"ERROR_EMPTY"`, ...) so codes can travel over JSON unchanged.
///
/// # Examples
///
/// ```
/// use nebula_registration::ValidationResult;
///
/// let result = nebula_registration::validate_id("Abc123");
/// assert_eq!(result, ValidationResult::Success);
/// assert_eq!(ValidationResult::ErrorEmpty.code(), "ERROR_EMPTY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationResult {
    /// Input satisfies all rules.
    Success,
    /// Input content violates the rule's pattern.
    ErrorFail,
    /// Input is the empty string (after trimming, where the rule trims).
    ErrorEmpty,
    /// Input length is outside the rule's required length.
    ErrorLength,
    /// Numeric character present where forbidden.
    ///
    /// Reserved: no current rule returns it.
    ErrorIncludeNumber,
    /// Non-numeric character present where forbidden.
    ///
    /// Reserved: no current rule returns it.
    ErrorIncludeChar,
    /// Date parsed but lies at or after the current instant.
    ErrorDateIsFuture,
    /// An internal failure occurred while validating.
    ErrorException,
}

impl ValidationResult {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Success,
        Self::ErrorFail,
        Self::ErrorEmpty,
        Self::ErrorLength,
        Self::ErrorIncludeNumber,
        Self::ErrorIncludeChar,
        Self::ErrorDateIsFuture,
        Self::ErrorException,
    ];

    /// Returns `true` for [`ValidationResult::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for every `Error*` variant.
    #[must_use]
    pub const fn is_error(self) -> bool {
        !self.is_success()
    }

    /// The stable upper snake case tag of this variant.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::ErrorFail => "ERROR_FAIL",
            Self::ErrorEmpty => "ERROR_EMPTY",
            Self::ErrorLength => "ERROR_LENGTH",
            Self::ErrorIncludeNumber => "ERROR_INCLUDE_NUMBER",
            Self::ErrorIncludeChar => "ERROR_INCLUDE_CHAR",
            Self::ErrorDateIsFuture => "ERROR_DATE_IS_FUTURE",
            Self::ErrorException => "ERROR_EXCEPTION",
        }
    }

    /// Converts into a `Result` so callers can chain checks with `?`.
    ///
    /// ```
    /// use nebula_registration::ValidationResult;
    ///
    /// fn check(id: &str, mobile: &str) -> Result<(), ValidationResult> {
    ///     nebula_registration::validate_id(id).into_result()?;
    ///     nebula_registration::validate_mobile(mobile).into_result()
    /// }
    ///
    /// assert_eq!(check("alice", "01023456789"), Ok(()));
    /// assert_eq!(check("alice", "0102"), Err(ValidationResult::ErrorLength));
    /// ```
    pub const fn into_result(self) -> Result<(), Self> {
        match self {
            Self::Success => Ok(()),
            other => Err(other),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ValidationResult {
    type Err = UnknownResultCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|result| result.code() == s)
            .ok_or_else(|| UnknownResultCode(s.to_owned()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
