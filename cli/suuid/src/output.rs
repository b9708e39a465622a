//! Output formatting for CLI commands.

use serde::Serialize;
use suuid::{Strategy, TimeCode};

use crate::error::CliError;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One identifier per line.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

#[derive(Debug, Serialize)]
struct IdsOutput<'a> {
    strategy: &'a str,
    ids: &'a [String],
}

#[derive(Debug, Serialize)]
struct TimeCodeOutput<'a> {
    strategy: &'a str,
    code: &'a str,
    year2: u32,
    day_of_year: u32,
    beat: u32,
    value: u64,
}

/// Render generated identifiers.
pub fn render_ids(
    strategy: Strategy,
    ids: &[String],
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(ids.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&IdsOutput {
            strategy: strategy.as_str(),
            ids,
        })?),
    }
}

/// Render a time code with its decoded parts.
pub fn render_time_code(
    strategy: Strategy,
    code: &TimeCode,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(code.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&TimeCodeOutput {
            strategy: strategy.as_str(),
            code: code.as_str(),
            year2: code.year2(),
            day_of_year: code.day_of_year(),
            beat: code.beat(),
            value: code.value(),
        })?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suuid::FixedClock;

    #[test]
    fn test_text_is_one_per_line() {
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_ids(Strategy::Hex, &ids, OutputFormat::Text).unwrap(), "a\nb");
    }

    #[test]
    fn test_json_ids() {
        let ids = vec!["abc".to_string()];
        let out = render_ids(Strategy::Swatch, &ids, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["strategy"], "swatch");
        assert_eq!(value["ids"][0], "abc");
    }

    #[test]
    fn test_json_time_code() {
        let clock = FixedClock::from_rfc3339("2026-10-16T12:00:00Z").unwrap();
        let generator = suuid::Generator::with_parts(clock, suuid::WeakRandom::seeded(0));
        let code = generator.time_code(Strategy::Hex);
        let out = render_time_code(Strategy::Hex, &code, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["code"], "191255C");
        assert_eq!(value["day_of_year"], 289);
        assert_eq!(value["beat"], 500);
    }
}
