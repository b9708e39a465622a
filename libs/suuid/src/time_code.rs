//! Coarse time codes.
//!
//! A time code packs `(year2, day_of_year, beat)` into one decimal number and
//! renders it as uppercase hexadecimal. A beat is 1/1000 of a day (86.4 s), so
//! every identifier minted inside the same beat shares the same time code.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

const MILLIS_PER_BEAT: i64 = 86_400;
const SECONDS_PER_DAY: i64 = 86_400;
const BEATS_PER_DAY: i64 = 1_000;

/// Biel Mean Time offset (UTC+1) used by Swatch Internet Time.
const BMT_OFFSET_SECS: i64 = 3_600;

/// A time code derived from one instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeCode {
    year2: u32,
    day_of_year: u32,
    beat: u32,
    value: u64,
    hex: String,
}

impl TimeCode {
    /// Hex timestamp encoding.
    ///
    /// `beat` counts 86.4 s units since the Unix epoch modulo 1000 and is
    /// concatenated without padding. The year and day come from the local
    /// calendar date of `instant`.
    #[must_use]
    pub fn hex_timestamp(instant: &DateTime<FixedOffset>) -> Self {
        let beat = instant
            .timestamp_millis()
            .div_euclid(MILLIS_PER_BEAT)
            .rem_euclid(BEATS_PER_DAY) as u32;
        let (year2, day_of_year) = calendar_parts(instant);
        Self::assemble(
            year2,
            day_of_year,
            beat,
            format!("{year2}{day_of_year:03}{beat}"),
        )
    }

    /// Swatch Internet Time encoding.
    ///
    /// `beat` is the UTC time of day shifted to Biel Mean Time, in 1/1000 day
    /// units, zero-padded to three digits.
    #[must_use]
    pub fn swatch(instant: &DateTime<FixedOffset>) -> Self {
        let secs = instant.naive_utc().time().num_seconds_from_midnight() as i64;
        let bmt_beats = (secs + BMT_OFFSET_SECS) * BEATS_PER_DAY / SECONDS_PER_DAY;
        let beat = bmt_beats.rem_euclid(BEATS_PER_DAY) as u32;
        let (year2, day_of_year) = calendar_parts(instant);
        Self::assemble(
            year2,
            day_of_year,
            beat,
            format!("{year2}{day_of_year:03}{beat:03}"),
        )
    }

    fn assemble(year2: u32, day_of_year: u32, beat: u32, digits: String) -> Self {
        // At most 2 + 3 + 3 digits, so this always fits.
        let value: u64 = digits.parse().unwrap_or_default();
        Self {
            year2,
            day_of_year,
            beat,
            value,
            hex: format!("{value:X}"),
        }
    }

    /// Last two digits of the year.
    #[must_use]
    pub const fn year2(&self) -> u32 {
        self.year2
    }

    /// 1-based ordinal day of the year.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Beat within the day, `0..1000`.
    #[must_use]
    pub const fn beat(&self) -> u32 {
        self.beat
    }

    /// The concatenated decimal value before hex rendering.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// The uppercase hexadecimal rendering.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Length of the hexadecimal rendering.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hex.len()
    }

    /// Always false; a time code renders at least `"0"`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }
}

impl std::fmt::Display for TimeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex)
    }
}

impl AsRef<str> for TimeCode {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

fn calendar_parts(instant: &DateTime<FixedOffset>) -> (u32, u32) {
    let year2 = instant.year().rem_euclid(100) as u32;
    (year2, instant.ordinal())
}
