use std::path::PathBuf;

use clap::Parser;
use salecast_config::SalecastConfig;

pub mod global;
pub mod root_commands;
pub mod shell_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `salecast` binary.
#[derive(Debug, Parser)]
#[command(
    name = "salecast",
    version,
    about = "Salecast - monthly sales history and ridge-regression forecasts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// User id to act as (defaults to general.default_user)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root directory for datasets, models and users (overrides storage.*)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Merge command-line flags over configured defaults.
    #[must_use]
    pub fn global_flags(&self, config: &SalecastConfig) -> GlobalFlags {
        let format = self
            .format
            .unwrap_or_else(|| OutputFormat::from_config(&config.general.default_format));
        let user = self.user.clone().or_else(|| {
            Some(config.general.default_user.clone()).filter(|user| !user.is_empty())
        });

        GlobalFlags {
            format,
            user,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use salecast_config::SalecastConfig;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "salecast", "--format", "table", "--user", "7", "--verbose", "retrain",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert_eq!(cli.user.as_deref(), Some("7"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Retrain));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["salecast", "retrain", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["salecast", "--format", "xml", "retrain"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn config_supplies_missing_format_and_user() {
        let mut config = SalecastConfig::default();
        config.general.default_format = "json".to_string();
        config.general.default_user = "3".to_string();

        let cli = Cli::try_parse_from(["salecast", "retrain"]).expect("cli should parse");
        let flags = cli.global_flags(&config);
        assert_eq!(flags.format, OutputFormat::Json);
        assert_eq!(flags.user.as_deref(), Some("3"));
    }

    #[test]
    fn flags_win_over_config() {
        let mut config = SalecastConfig::default();
        config.general.default_user = "3".to_string();

        let cli = Cli::try_parse_from(["salecast", "-u", "9", "-f", "raw", "retrain"])
            .expect("cli should parse");
        let flags = cli.global_flags(&config);
        assert_eq!(flags.format, OutputFormat::Raw);
        assert_eq!(flags.user.as_deref(), Some("9"));
    }

    #[test]
    fn empty_default_user_means_none() {
        let cli = Cli::try_parse_from(["salecast", "retrain"]).expect("cli should parse");
        assert!(cli.global_flags(&SalecastConfig::default()).user.is_none());
    }

    #[test]
    fn unknown_configured_format_falls_back_to_table() {
        assert_eq!(OutputFormat::from_config("yaml"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_config("JSON"), OutputFormat::Json);
    }
}
