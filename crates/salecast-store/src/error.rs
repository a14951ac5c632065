//! Record store error types.

use std::path::PathBuf;

use salecast_core::{ErrorKind, ValidationError};
use thiserror::Error;

/// Errors from record validation, CSV parsing, and dataset persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Bad field values or a malformed CSV schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A CSV file could not be parsed.
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Reading or writing a dataset file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Failure category for user-facing reporting.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Csv(error) if error.is_io_error() => ErrorKind::Io,
            Self::Csv(_) => ErrorKind::Validation,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}
