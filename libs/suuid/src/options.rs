//! Per-call generation options.
//!
//! Every field is optional. A missing field, an empty options value and no
//! options at all (`None`) all mean "use the defaults".

use serde::{Deserialize, Serialize};

/// Total identifier length used when none is requested.
pub const DEFAULT_LENGTH: i64 = 24;

/// Smallest length the swatch strategy accepts.
pub const SWATCH_MIN_LENGTH: i64 = 8;

/// Options for the hex timestamp strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexOptions {
    /// Total output length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,

    /// Literal text placed before the time code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Literal text placed after the random fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl HexOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Requested length, or [`DEFAULT_LENGTH`].
    pub fn length(&self) -> i64 {
        self.length.unwrap_or(DEFAULT_LENGTH)
    }

    /// Requested prefix, or `""`.
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or_default()
    }

    /// Requested suffix, or `""`.
    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or_default()
    }
}

/// Options for the swatch strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchOptions {
    /// Total output length in characters; at least [`SWATCH_MIN_LENGTH`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,

    /// Literal text placed before the time code, left-padded with `0` to two
    /// characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl SwatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Requested length, or [`DEFAULT_LENGTH`].
    pub fn length(&self) -> i64 {
        self.length.unwrap_or(DEFAULT_LENGTH)
    }

    /// The prefix padded to two characters; `"00"` when none is given.
    pub fn padded_prefix(&self) -> String {
        format!("{:0>2}", self.prefix.as_deref().unwrap_or_default())
    }
}
