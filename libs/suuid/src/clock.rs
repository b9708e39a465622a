//! Clock capability.
//!
//! The generator reads "now" through [`Clock`] so tests can pin the instant.

use chrono::{DateTime, FixedOffset, Local};

use crate::SuuidError;

/// A source of the current instant, including the local UTC offset.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The system wall clock in the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    /// Parses an RFC 3339 timestamp such as `2026-10-16T12:00:00+02:00`.
    pub fn from_rfc3339(s: &str) -> Result<Self, SuuidError> {
        DateTime::parse_from_rfc3339(s)
            .map(Self)
            .map_err(|e| SuuidError::invalid_argument(format!("invalid timestamp '{s}': {e}")))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}
