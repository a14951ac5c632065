use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a configured default, falling back to `Table` on unknown values.
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        Self::from_str(value, true).unwrap_or_else(|_| {
            tracing::warn!(value, "unknown general.default_format; using table");
            Self::Table
        })
    }
}

/// Global flags after merging the command line with configuration.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub user: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
    pub data_dir: Option<PathBuf>,
}
