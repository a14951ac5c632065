pub mod account;
pub mod dispatch;
pub mod forecast;
pub mod history;
pub mod ingest;
pub mod retrain;
pub mod shell;

use crate::cli::GlobalFlags;

/// Print a human-facing note on stderr unless `--quiet` is set.
pub fn notice(flags: &GlobalFlags, message: &str) {
    if !flags.quiet {
        eprintln!("{message}");
    }
}
