//! Time source for the disallow-future date check.
//!
//! Compact dates carry no offset, so they are read as local calendar days and
//! compared against local wall-clock time.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

/// Supplies the observation instant for date validation.
pub trait Clock {
    /// The current local instant.
    fn now(&self) -> NaiveDateTime;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

// ============================================================================
// SYSTEM CLOCK
// ============================================================================

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

// ============================================================================
// FIXED CLOCK
// ============================================================================

/// Always reports the same instant.
///
/// # Examples
///
/// ```
/// use nebula_registration::{Clock, FixedClock};
///
/// let clock = FixedClock::at_ymd_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// assert_eq!(clock.now().to_string(), "2024-06-01 12:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Freezes time at `instant`.
    #[must_use]
    pub const fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }

    /// Freezes time at the given local date and time.
    ///
    /// Returns `None` when the components do not form a valid instant.
    #[must_use]
    pub fn at_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, min, sec)
            .map(Self)
    }

    /// The frozen instant.
    #[must_use]
    pub const fn instant(&self) -> NaiveDateTime {
        self.0
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
