//! Trainer and forecaster error types.

use std::path::PathBuf;

use salecast_core::{ErrorKind, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Not enough records to fit.
    #[error("Insufficient data: need at least {required} records to train, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Bad forecast request (e.g. a zero horizon).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The fit produced non-finite coefficients.
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Reading or writing a model artifact failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A model artifact could not be encoded or decoded.
    #[error("Model artifact {} is unreadable: {source}", path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ModelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Failure category for user-facing reporting.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::Validation(_) | Self::Numerical(_) => ErrorKind::Validation,
            Self::Io { .. } | Self::Artifact { .. } => ErrorKind::Io,
        }
    }
}
