//! # salecast-service
//!
//! Orchestration layer for Salecast.
//!
//! [`ForecastService`] wraps the [`RecordStore`](salecast_store::RecordStore)
//! and [`ModelStore`](salecast_model::ModelStore). Every mutation follows
//! the same protocol:
//! 1. Load the user's dataset
//! 2. Append the new records (all-or-nothing)
//! 3. Persist the whole dataset
//! 4. Retrain from scratch when there are enough records
//!
//! Forecasts are computed on demand. The most recent batch lives in a
//! [`Session`], never on disk.

pub mod error;
pub mod report;
pub mod service;
pub mod session;

pub use error::ServiceError;
pub use report::{IngestReport, TrainingOutcome};
pub use service::{ForecastService, ServiceOptions};
pub use session::Session;
