//! Results of a data mutation.

use salecast_model::TrainedModel;
use serde::Serialize;

/// What happened to the model after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrainingOutcome {
    Trained {
        coefficients: [f64; 2],
        intercept: f64,
        r_squared: f64,
        n_samples: usize,
    },
    /// Too few records; any previous model is left in place.
    Skipped { records: usize, required: usize },
    /// The records were saved but the fit did not succeed; any previous
    /// model is left in place.
    Failed { reason: String },
}

impl From<&TrainedModel> for TrainingOutcome {
    fn from(model: &TrainedModel) -> Self {
        Self::Trained {
            coefficients: model.coefficients,
            intercept: model.intercept,
            r_squared: model.r_squared,
            n_samples: model.n_samples,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestReport {
    pub added: usize,
    pub total: usize,
    pub training: TrainingOutcome,
}
