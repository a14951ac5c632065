use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::root_commands::{AddArgs, HistoryArgs, UploadArgs};

/// One line typed at the `salecast shell` prompt.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommands,
}

impl ShellLine {
    /// Split one prompt line with shell quoting rules and parse it.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns the message to show at the prompt when quotes are unbalanced
    /// or clap rejects the words.
    pub fn parse_line(line: &str) -> Result<Option<ShellCommands>, String> {
        let words = shlex::split(line).ok_or_else(|| format!("unbalanced quotes in: {line}"))?;
        if words.is_empty() {
            return Ok(None);
        }
        Self::try_parse_from(words)
            .map(|parsed| Some(parsed.command))
            .map_err(|error| error.to_string())
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum ShellCommands {
    /// Add one monthly sales record.
    Add(AddArgs),
    /// Import records from a CSV file.
    Upload(UploadArgs),
    /// Refit the model from the stored dataset.
    Retrain,
    /// Show historical sales.
    History(HistoryArgs),
    /// Forecast and keep the result as the current batch.
    Predict(ShellPredictArgs),
    /// Write the current batch as CSV.
    Export(ShellExportArgs),
    /// Show the current batch.
    Show,
    /// Forget the current batch.
    Clear,
    /// Leave the shell.
    #[command(alias = "quit")]
    Exit,
}

#[derive(Clone, Debug, Args)]
pub struct ShellPredictArgs {
    /// Years to forecast (defaults to forecast.default_horizon_years)
    pub years: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ShellExportArgs {
    /// Output path (defaults to predicted_sales.csv)
    pub output: Option<PathBuf>,
}
