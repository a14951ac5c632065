//! Cross-cutting error types for Salecast.
//!
//! Each crate defines its own error enum (`StoreError`, `ModelError`, ...).
//! They all report one of the [`ErrorKind`]s below through a `kind()` method,
//! so callers can branch on the failure category without matching every
//! crate's variants. Validation failures are shared as [`ValidationError`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure category surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bad field values, month out of range, or malformed CSV schema.
    Validation,
    /// Fewer records than the trainer needs.
    InsufficientData,
    /// No trained model exists for the user.
    NoModel,
    /// No dataset or prediction batch exists.
    NoData,
    /// Persistence failure.
    Io,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::InsufficientData => "insufficient_data",
            Self::NoModel => "no_model",
            Self::NoData => "no_data",
            Self::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem found while validating a single record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordIssue {
    /// 1-based data row in the source file, when the record came from one.
    pub row: Option<usize>,
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl RecordIssue {
    #[must_use]
    pub fn new(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self {
            row: None,
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn at_row(mut self, row: Option<usize>) -> Self {
        self.row = row;
        self
    }
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(row) = self.row {
            write!(f, "row {row}: ")?;
        }
        write!(f, "{} '{}' {}", self.field, self.value, self.reason)
    }
}

/// Validation failure, listing every offending record or schema problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {}", render_issues(.issues, .message.as_deref()))]
pub struct ValidationError {
    message: Option<String>,
    issues: Vec<RecordIssue>,
}

impl ValidationError {
    /// A validation failure that is not tied to a record field.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            issues: Vec::new(),
        }
    }

    /// A validation failure listing per-record issues.
    #[must_use]
    pub const fn from_issues(issues: Vec<RecordIssue>) -> Self {
        Self {
            message: None,
            issues,
        }
    }

    #[must_use]
    pub fn issues(&self) -> &[RecordIssue] {
        &self.issues
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

fn render_issues(issues: &[RecordIssue], message: Option<&str>) -> String {
    let mut parts: Vec<String> = message.map(str::to_string).into_iter().collect();
    parts.extend(issues.iter().map(ToString::to_string));
    parts.join("; ")
}
