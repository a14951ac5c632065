//! Forecast output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;

/// One forecast month. `sales` is the model output rounded to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Prediction {
    pub year: i32,
    pub month: u32,
    pub sales: i64,
}

impl Prediction {
    #[must_use]
    pub const fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}

/// The most recent forecast for a session, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PredictionBatch {
    /// The (year, month) the forecast starts after.
    pub last_observed: YearMonth,
    pub horizon_years: u32,
    pub predictions: Vec<Prediction>,
}

impl PredictionBatch {
    #[must_use]
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prediction> {
        self.predictions.iter()
    }
}
