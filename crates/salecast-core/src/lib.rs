//! # salecast-core
//!
//! Core types, calendar arithmetic, and error kinds for Salecast.
//!
//! This crate provides the foundational types shared across all Salecast crates:
//! - `SalesRecord` and its unvalidated `RawRecord` form
//! - `Dataset`, the append-only per-user record collection
//! - `YearMonth` calendar values used by the forecaster and charts
//! - `Prediction` and `PredictionBatch` forecast output
//! - `UserId`, the opaque identity every store is namespaced by
//! - `ErrorKind` and `ValidationError`, shared by every crate-level error

pub mod calendar;
pub mod dataset;
pub mod errors;
pub mod identity;
pub mod prediction;
pub mod record;

pub use calendar::YearMonth;
pub use dataset::Dataset;
pub use errors::{ErrorKind, RecordIssue, ValidationError};
pub use identity::UserId;
pub use prediction::{Prediction, PredictionBatch};
pub use record::{RawRecord, SalesRecord};
