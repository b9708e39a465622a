//! Error handling and display for the CLI.

use colored::Colorize;
use suuid::SuuidError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Generate(#[from] SuuidError),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(CliError::Generate(gen_err)) = err.downcast_ref::<CliError>() {
        if gen_err.is_invalid_argument() {
            eprintln!(
                "\n{}",
                "Hint: hex needs --length >= 0, swatch needs --length >= 8.".yellow()
            );
        }
    }
}
