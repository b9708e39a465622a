//! Identifier assembly and validation.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::options::{HexOptions, SwatchOptions, SWATCH_MIN_LENGTH};
use crate::random::{self, RandomSource, SystemRandom, WeakRandom};
use crate::time_code::TimeCode;
use crate::SuuidError;

/// The two identifier layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `prefix + hex timestamp + secure fill + suffix`, exact length or empty.
    #[default]
    Hex,
    /// `pad2(prefix) + swatch time code + weak fill`, minimum length 8.
    Swatch,
}

impl Strategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Strategy::Hex => "hex",
            Strategy::Swatch => "swatch",
        }
    }

    /// Encodes `instant` with this strategy's time code.
    pub fn time_code(&self, instant: &DateTime<FixedOffset>) -> TimeCode {
        match self {
            Strategy::Hex => TimeCode::hex_timestamp(instant),
            Strategy::Swatch => TimeCode::swatch(instant),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SuuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Strategy::Hex),
            "swatch" => Ok(Strategy::Swatch),
            other => Err(SuuidError::invalid_argument(format!(
                "unknown strategy '{other}', expected 'hex' or 'swatch'"
            ))),
        }
    }
}

/// Builds identifiers from an injected clock and random source.
///
/// Lengths count characters, not bytes, so multi-byte prefixes and suffixes
/// take one slot each.
#[derive(Debug, Clone)]
pub struct Generator<C = SystemClock, R = SystemRandom> {
    clock: C,
    random: R,
    weak: Option<WeakRandom>,
}

impl Generator {
    /// A generator on the system clock and the best available random source.
    pub fn new() -> Self {
        Self::with_parts(SystemClock, SystemRandom::detect())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: RandomSource> Generator<C, R> {
    pub fn with_parts(clock: C, random: R) -> Self {
        debug!(secure = random.is_secure(), "identifier generator ready");
        Self {
            clock,
            random,
            weak: None,
        }
    }

    /// Replaces the low-quality generator used by the swatch strategy and by
    /// the hex fallback path.
    #[must_use]
    pub fn with_weak(mut self, weak: WeakRandom) -> Self {
        self.weak = Some(weak);
        self
    }

    /// The current time code for `strategy`.
    pub fn time_code(&self, strategy: Strategy) -> TimeCode {
        strategy.time_code(&self.clock.now())
    }

    /// Hex timestamp identifier: `prefix + time code + fill + suffix`.
    ///
    /// Returns an empty string when the fixed parts do not fit in the
    /// requested length. A negative length is an error.
    pub fn hex(&mut self, options: Option<&HexOptions>) -> Result<String, SuuidError> {
        let defaults = HexOptions::default();
        let options = options.unwrap_or(&defaults);
        let (length, prefix, suffix) = (options.length(), options.prefix(), options.suffix());

        let time_code = self.time_code(Strategy::Hex);
        let fixed = (prefix.chars().count() + time_code.len() + suffix.chars().count()) as i64;

        if length < 0 {
            return Err(SuuidError::invalid_argument("length must be non-negative"));
        }
        let remaining = length - fixed;
        if remaining < 0 {
            debug!(length, fixed, "requested length too small for fixed parts");
            return Ok(String::new());
        }

        let fill = self.fill_secure(to_usize(remaining)?)?;

        let mut id = String::with_capacity(to_usize(length)?);
        id.push_str(prefix);
        id.push_str(time_code.as_str());
        id.push_str(&fill);
        id.push_str(suffix);
        Ok(id)
    }

    /// Swatch identifier: `pad2(prefix) + time code + weak fill`.
    ///
    /// Lengths under 8 are rejected. When the padded prefix and time code are
    /// already longer than requested, they are returned untrimmed.
    pub fn swatch(&mut self, options: Option<&SwatchOptions>) -> Result<String, SuuidError> {
        let defaults = SwatchOptions::default();
        let options = options.unwrap_or(&defaults);
        let length = options.length();

        if length < SWATCH_MIN_LENGTH {
            return Err(SuuidError::invalid_argument(format!(
                "length must be at least {SWATCH_MIN_LENGTH}"
            )));
        }

        let time_code = self.time_code(Strategy::Swatch);
        let mut id = options.padded_prefix();
        id.push_str(time_code.as_str());

        let current = id.chars().count() as i64;
        if current > length {
            debug!(length, current, "swatch fixed parts exceed requested length");
        }
        let missing = to_usize((length - current).max(0))?;
        id.push_str(&random::fill_weak(missing, self.weak())?);
        Ok(id)
    }

    /// Byte-mapped fill from the main source; weak draw when that source is
    /// not secure or fails during this call.
    fn fill_secure(&mut self, n: usize) -> Result<String, SuuidError> {
        if !self.random.is_secure() {
            return random::fill_weak(n, &mut self.random);
        }
        match random::fill_strong(n, &mut self.random) {
            Ok(fill) => Ok(fill),
            Err(e) if e.is_entropy() => {
                warn!(error = %e, "secure fill failed, falling back to weak generator");
                random::fill_weak(n, self.weak())
            }
            Err(e) => Err(e),
        }
    }

    fn weak(&mut self) -> &mut WeakRandom {
        self.weak.get_or_insert_with(WeakRandom::new)
    }
}

fn to_usize(n: i64) -> Result<usize, SuuidError> {
    usize::try_from(n)
        .map_err(|_| SuuidError::invalid_argument(format!("length {n} does not fit in memory")))
}
