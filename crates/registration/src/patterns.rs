//! Rule constants and the compiled patterns behind them.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RegistrationError;

/// Required length of a national mobile number.
pub const MOBILE_LENGTH: usize = 11;

/// Minimum trimmed length of a compact `YYYYMMDD` date.
pub const DATE_LENGTH: usize = 8;

/// Literal prefix every mobile number starts with.
pub const MOBILE_PREFIX: &str = "010";

/// Account identifiers: ASCII letters and digits only.
pub const ID_PATTERN: &str = "^[A-Za-z0-9]*$";

/// National mobile format: `010`, a fourth digit in `2..=9`, seven more digits.
pub const MOBILE_PATTERN: &str = "^010[2-9][0-9]{7}$";

// The compile result is kept so a bad pattern surfaces as an internal
// failure of the validator instead of a panic at first use.
static ID_REGEX: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(ID_PATTERN));

static MOBILE_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(MOBILE_PATTERN));

fn resolve(
    name: &'static str,
    compiled: &'static Result<Regex, regex::Error>,
) -> Result<&'static Regex, RegistrationError> {
    compiled
        .as_ref()
        .map_err(|source| RegistrationError::Pattern {
            name,
            source: source.clone(),
        })
}

/// The compiled identifier pattern.
pub(crate) fn id_regex() -> Result<&'static Regex, RegistrationError> {
    resolve("id", &ID_REGEX)
}

/// The compiled mobile pattern.
pub(crate) fn mobile_regex() -> Result<&'static Regex, RegistrationError> {
    resolve("mobile", &MOBILE_REGEX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_patterns_compile() {
        assert!(id_regex().is_ok());
        assert!(mobile_regex().is_ok());
    }

    #[test]
    fn mobile_pattern_agrees_with_constants() {
        let re = mobile_regex().unwrap();
        let sample = format!("{MOBILE_PREFIX}23456789");
        assert_eq!(sample.len(), MOBILE_LENGTH);
        assert!(re.is_match(&sample));
    }
}
