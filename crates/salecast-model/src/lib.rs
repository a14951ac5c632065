//! # salecast-model
//!
//! Model trainer and forecaster.
//!
//! - [`trainer::fit`] fits a ridge regression of sales on (year, month)
//!   over the whole dataset.
//! - [`ModelStore`] saves and loads the fitted coefficients per user.
//! - [`forecast::predict`] turns a model into monthly, integer-rounded
//!   predictions for the months after the last observed one.
//!
//! The model is deliberately crude: two raw calendar features and a weak
//! L2 penalty. It is a trend line, not a seasonal model.

pub mod artifact;
pub mod error;
pub mod forecast;
pub mod ridge;
pub mod trainer;

pub use artifact::ModelStore;
pub use error::ModelError;
pub use forecast::{last_observed, predict};
pub use trainer::{DEFAULT_ALPHA, MIN_TRAINING_RECORDS, TrainedModel};
