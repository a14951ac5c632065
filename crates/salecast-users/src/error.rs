use std::path::PathBuf;

use salecast_core::{ErrorKind, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Email address already registered: {0}")]
    EmailTaken(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl UserError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmailTaken(_) | Self::InvalidCredentials | Self::Validation(_) => {
                ErrorKind::Validation
            }
            Self::Io { .. } | Self::Hashing(_) => ErrorKind::Io,
        }
    }
}
