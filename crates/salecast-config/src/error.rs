//! Configuration error types.

use salecast_core::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    /// Every configuration failure is a bad value from some layer.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Figment(_) | Self::InvalidValue { .. } => ErrorKind::Validation,
        }
    }
}
