use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Register a new account and print its user id.
    Signup(CredentialArgs),
    /// Check credentials and print the user id to pass as --user.
    Login(CredentialArgs),
    /// Add one monthly sales record.
    Add(AddArgs),
    /// Import records from a CSV file with year, month and sales columns.
    Upload(UploadArgs),
    /// Refit the model from the stored dataset.
    Retrain,
    /// Show historical sales (available once a model is trained).
    History(HistoryArgs),
    /// Forecast monthly sales after the last observed month.
    Predict(PredictArgs),
    /// Forecast and write the result as CSV.
    Export(ExportArgs),
    /// Interactive session that keeps the latest forecast between commands.
    Shell,
}

#[derive(Clone, Debug, Args)]
pub struct CredentialArgs {
    /// Account e-mail address
    #[arg(long)]
    pub email: String,
    /// Account password
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Calendar year, e.g. 2024
    pub year: String,
    /// Month number, 1-12
    pub month: String,
    /// Sales amount for the month
    #[arg(allow_hyphen_values = true)]
    pub sales: String,
}

#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    /// Path to a .csv file
    pub path: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Also write the chart as an embeddable HTML fragment
    #[arg(long)]
    pub html: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct PredictArgs {
    /// Years to forecast (defaults to forecast.default_horizon_years)
    #[arg(short, long)]
    pub years: Option<u32>,
    /// Write the forecast as CSV to this path
    #[arg(short, long)]
    pub export: Option<PathBuf>,
    /// Write the forecast chart as an embeddable HTML fragment
    #[arg(long)]
    pub html: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Years to forecast before exporting (defaults to forecast.default_horizon_years)
    #[arg(short, long)]
    pub years: Option<u32>,
    /// Output path (defaults to predicted_sales.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
