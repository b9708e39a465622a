//! # suuid
//!
//! Short, sortable, mostly-unique string identifiers.
//!
//! An identifier is a coarse time code followed by random characters,
//! optionally framed by a literal prefix and suffix. Identifiers minted in the
//! same beat (86.4 s) share their time code, so they sort by time bucket, not
//! by exact instant.
//!
//! ## Strategies
//!
//! - [`Strategy::Hex`]: `{prefix}{hex timestamp}{fill}{suffix}`. The output is
//!   exactly `length` characters, or empty when the prefix, time code and
//!   suffix do not fit. The fill comes from the OS secure source.
//! - [`Strategy::Swatch`]: `{prefix padded to 2}{swatch time code}{fill}`.
//!   `length` must be at least 8. The fill comes from a fast non-cryptographic
//!   generator.
//!
//! ```ignore
//! let id = suuid::hex(Some(&HexOptions::new().with_length(20).with_prefix("PRE-")))?;
//! assert!(id.starts_with("PRE-"));
//! assert_eq!(id.len(), 20);
//! ```
//!
//! These are not UUIDs: there is no machine discriminator and no counter, and
//! uniqueness is only probabilistic.

pub mod alphabet;
mod clock;
mod error;
mod generator;
mod options;
pub mod random;
mod time_code;

pub use alphabet::ALPHABET;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::SuuidError;
pub use generator::{Generator, Strategy};
pub use options::{HexOptions, SwatchOptions, DEFAULT_LENGTH, SWATCH_MIN_LENGTH};
pub use random::{OsRandom, RandomSource, SystemRandom, WeakRandom};
pub use time_code::TimeCode;

/// Generates a hex timestamp identifier with the system clock and random
/// source. `None` uses the defaults.
pub fn hex(options: Option<&HexOptions>) -> Result<String, SuuidError> {
    Generator::new().hex(options)
}

/// Generates a swatch identifier with the system clock and a fresh weak
/// generator. `None` uses the defaults.
pub fn swatch(options: Option<&SwatchOptions>) -> Result<String, SuuidError> {
    Generator::new().swatch(options)
}
