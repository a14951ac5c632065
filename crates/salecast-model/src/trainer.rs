//! Model trainer.

use chrono::{DateTime, Utc};
use salecast_core::{Dataset, SalesRecord};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ridge::{self, RidgeFit};

/// Fewest records a fit is attempted on.
pub const MIN_TRAINING_RECORDS: usize = 2;

/// Default ridge penalty. Weak: it keeps a two-record dataset from being
/// singular, it does not meaningfully regularise.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Fitted regression of sales on (year, month).
///
/// Overwritten on every retrain; there is no versioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    /// Weights for `[year, month]`.
    pub coefficients: [f64; 2],
    pub intercept: f64,
    pub alpha: f64,
    pub n_samples: usize,
    /// In-sample R², kept for diagnostics only.
    pub r_squared: f64,
    pub trained_at: DateTime<Utc>,
}

impl TrainedModel {
    /// Raw (unrounded) model output for one calendar month.
    #[must_use]
    pub fn predict_one(&self, year: i32, month: u32) -> f64 {
        self.as_fit().predict(features(year, month))
    }

    const fn as_fit(&self) -> RidgeFit {
        RidgeFit {
            coefficients: self.coefficients,
            intercept: self.intercept,
        }
    }
}

fn features(year: i32, month: u32) -> [f64; 2] {
    [f64::from(year), f64::from(month)]
}

/// Fit a ridge regression over the whole dataset.
///
/// Records are sorted by date first so diagnostics are reproducible; the
/// solution itself does not depend on order.
///
/// # Errors
///
/// - `ModelError::InsufficientData` with fewer than [`MIN_TRAINING_RECORDS`].
/// - `ModelError::Numerical` if `alpha` is not positive.
pub fn fit(dataset: &Dataset, alpha: f64) -> Result<TrainedModel, ModelError> {
    if dataset.len() < MIN_TRAINING_RECORDS {
        return Err(ModelError::InsufficientData {
            required: MIN_TRAINING_RECORDS,
            actual: dataset.len(),
        });
    }

    let sorted = dataset.sorted_by_date();
    let xs: Vec<[f64; 2]> = sorted.iter().map(|r| features(r.year, r.month)).collect();
    let ys: Vec<f64> = sorted.iter().map(|r: &SalesRecord| r.sales).collect();

    let fitted = ridge::fit(&xs, &ys, alpha)?;
    let r_squared = ridge::r_squared(&fitted, &xs, &ys);

    tracing::debug!(
        records = sorted.len(),
        year_coef = fitted.coefficients[0],
        month_coef = fitted.coefficients[1],
        intercept = fitted.intercept,
        r_squared,
        "fitted ridge model"
    );

    Ok(TrainedModel {
        coefficients: fitted.coefficients,
        intercept: fitted.intercept,
        alpha,
        n_samples: sorted.len(),
        r_squared,
        trained_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use salecast_core::ErrorKind;

    use super::*;

    fn dataset(rows: &[(i32, u32, f64)]) -> Dataset {
        Dataset::from_records(
            rows.iter()
                .map(|&(year, month, sales)| SalesRecord { year, month, sales })
                .collect(),
        )
        .unwrap()
    }

    #[rstest]
    #[case(&[])]
    #[case(&[(2023, 1, 100.0)])]
    fn fewer_than_two_records_is_insufficient(#[case] rows: &[(i32, u32, f64)]) {
        let err = fit(&dataset(rows), DEFAULT_ALPHA).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
        assert!(matches!(
            err,
            ModelError::InsufficientData { required: 2, actual } if actual == rows.len()
        ));
    }

    #[test]
    fn two_records_fit_and_predict() {
        let model = fit(&dataset(&[(2023, 1, 100.0), (2023, 2, 150.0)]), DEFAULT_ALPHA).unwrap();
        assert_eq!(model.n_samples, 2);
        assert!(model.predict_one(2023, 3) > 150.0);
        assert!(model.r_squared > 0.9);
    }

    #[test]
    fn row_order_does_not_change_the_fit() {
        let a = fit(
            &dataset(&[(2023, 1, 10.0), (2023, 5, 30.0), (2024, 2, 55.0)]),
            DEFAULT_ALPHA,
        )
        .unwrap();
        let b = fit(
            &dataset(&[(2024, 2, 55.0), (2023, 1, 10.0), (2023, 5, 30.0)]),
            DEFAULT_ALPHA,
        )
        .unwrap();
        assert_eq!(a.coefficients, b.coefficients);
        assert!((a.intercept - b.intercept).abs() < 1e-9);
    }
}
