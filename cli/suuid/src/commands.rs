//! CLI commands.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use suuid::{Clock, FixedClock, Generator, HexOptions, Strategy, SwatchOptions, SystemClock};
use tracing::debug;

use crate::error::CliError;
use crate::output::{self, OutputFormat};

/// suuidctl - short, sortable, mostly-unique identifiers.
#[derive(Debug, Parser)]
#[command(name = "suuidctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hex timestamp identifiers with secure random fill.
    Hex(HexCommand),

    /// Swatch Internet Time identifiers with fast random fill.
    Swatch(SwatchCommand),

    /// Print the current time code.
    TimeCode(TimeCodeCommand),
}

#[derive(Debug, Args)]
struct HexCommand {
    /// Total identifier length.
    #[arg(long, short, env = "SUUID_LENGTH", allow_negative_numbers = true)]
    length: Option<i64>,

    /// Text placed before the time code.
    #[arg(long, short, env = "SUUID_PREFIX", allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Text placed after the random fill.
    #[arg(long, short, env = "SUUID_SUFFIX", allow_hyphen_values = true)]
    suffix: Option<String>,

    /// Number of identifiers to print.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
}

#[derive(Debug, Args)]
struct SwatchCommand {
    /// Total identifier length (at least 8).
    #[arg(long, short, env = "SUUID_LENGTH", allow_negative_numbers = true)]
    length: Option<i64>,

    /// Text placed before the time code, zero-padded to two characters.
    #[arg(long, short, env = "SUUID_PREFIX", allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Number of identifiers to print.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
}

#[derive(Debug, Args)]
struct TimeCodeCommand {
    /// Time code layout.
    #[arg(long, default_value = "hex")]
    strategy: Strategy,

    /// Encode this RFC 3339 instant instead of now.
    #[arg(long)]
    at: Option<String>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let rendered = match self.command {
            Commands::Hex(cmd) => cmd.run(self.format)?,
            Commands::Swatch(cmd) => cmd.run(self.format)?,
            Commands::TimeCode(cmd) => cmd.run(self.format)?,
        };
        if !rendered.is_empty() {
            println!("{rendered}");
        }
        Ok(())
    }
}

impl HexCommand {
    fn options(&self) -> HexOptions {
        HexOptions {
            length: self.length,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
        }
    }

    fn run(&self, format: OutputFormat) -> Result<String, CliError> {
        let options = self.options();
        debug!(?options, count = self.count, "generating hex identifiers");

        let mut generator = Generator::new();
        let ids = (0..self.count)
            .map(|_| generator.hex(Some(&options)))
            .collect::<Result<Vec<_>, _>>()?;
        output::render_ids(Strategy::Hex, &ids, format)
    }
}

impl SwatchCommand {
    fn options(&self) -> SwatchOptions {
        SwatchOptions {
            length: self.length,
            prefix: self.prefix.clone(),
        }
    }

    fn run(&self, format: OutputFormat) -> Result<String, CliError> {
        let options = self.options();
        debug!(?options, count = self.count, "generating swatch identifiers");

        let mut generator = Generator::new();
        let ids = (0..self.count)
            .map(|_| generator.swatch(Some(&options)))
            .collect::<Result<Vec<_>, _>>()?;
        output::render_ids(Strategy::Swatch, &ids, format)
    }
}

impl TimeCodeCommand {
    fn run(&self, format: OutputFormat) -> Result<String, CliError> {
        let now = match &self.at {
            Some(at) => FixedClock::from_rfc3339(at)?.now(),
            None => SystemClock.now(),
        };
        let code = self.strategy.time_code(&now);
        output::render_time_code(self.strategy, &code, format)
    }
}
