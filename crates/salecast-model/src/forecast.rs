//! Monthly forecaster.

use salecast_core::{Dataset, Prediction, PredictionBatch, ValidationError, YearMonth};

use crate::error::ModelError;
use crate::trainer::TrainedModel;

pub const MONTHS_PER_YEAR: u32 = 12;

/// The (year, month) a forecast starts after.
///
/// Takes the maximum year and the maximum month independently across all
/// rows, so `(2023, 12)` and `(2025, 3)` give `(2025, 12)`, a month that may
/// not exist in the data. Kept as-is; a stray future year shifts every
/// forecast.
#[must_use]
pub fn last_observed(dataset: &Dataset) -> Option<YearMonth> {
    let year = dataset.iter().map(|r| r.year).max()?;
    let month = dataset.iter().map(|r| r.month).max()?;
    YearMonth::new(year, month)
}

/// Reject horizons outside `1..=max_years`.
///
/// # Errors
///
/// Returns `ModelError::Validation` naming the accepted range.
pub fn check_horizon(horizon_years: u32, max_years: u32) -> Result<(), ModelError> {
    if horizon_years == 0 || horizon_years > max_years {
        return Err(ValidationError::message(format!(
            "horizon must be between 1 and {max_years} years, got {horizon_years}"
        ))
        .into());
    }
    Ok(())
}

/// Predict `horizon_years * 12` months strictly after `last_observed`.
///
/// Model output is rounded to the nearest integer, ties to even.
///
/// # Errors
///
/// Returns `ModelError::Validation` when `horizon_years` is zero or the
/// forecast would run past the largest representable year.
pub fn predict(
    model: &TrainedModel,
    last_observed: YearMonth,
    horizon_years: u32,
) -> Result<PredictionBatch, ModelError> {
    if horizon_years == 0 {
        return Err(ValidationError::message("horizon must be a positive number of years").into());
    }
    let fits = i32::try_from(horizon_years)
        .ok()
        .and_then(|years| last_observed.year.checked_add(years))
        .is_some();
    if !fits {
        return Err(ValidationError::message(format!(
            "a {horizon_years}-year horizon after {last_observed} is out of range"
        ))
        .into());
    }

    let months = horizon_years as usize * MONTHS_PER_YEAR as usize;
    let predictions: Vec<Prediction> = last_observed
        .months_after(months)
        .map(|ym| Prediction {
            year: ym.year,
            month: ym.month,
            sales: round_sales(model.predict_one(ym.year, ym.month)),
        })
        .collect();

    tracing::debug!(
        %last_observed,
        horizon_years,
        predictions = predictions.len(),
        "generated forecast"
    );

    Ok(PredictionBatch {
        last_observed,
        horizon_years,
        predictions,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn round_sales(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use salecast_core::{ErrorKind, SalesRecord};

    use super::*;

    fn model(year_coef: f64, month_coef: f64, intercept: f64) -> TrainedModel {
        TrainedModel {
            coefficients: [year_coef, month_coef],
            intercept,
            alpha: 0.1,
            n_samples: 2,
            r_squared: 1.0,
            trained_at: Utc::now(),
        }
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn dataset(rows: &[(i32, u32)]) -> Dataset {
        Dataset::from_records(
            rows.iter()
                .map(|&(year, month)| SalesRecord {
                    year,
                    month,
                    sales: 1.0,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn last_observed_of_empty_dataset_is_none() {
        assert_eq!(last_observed(&Dataset::new()), None);
    }

    /// Quirk: maxima are taken per column, not by calendar date.
    #[test]
    fn last_observed_takes_column_wise_maxima() {
        let ds = dataset(&[(2023, 12), (2024, 1), (2025, 3)]);
        assert_eq!(last_observed(&ds), Some(ym(2025, 12)));
    }

    #[test]
    fn last_observed_ignores_append_order() {
        let ds = dataset(&[(2023, 2), (2022, 7), (2023, 1)]);
        assert_eq!(last_observed(&ds), Some(ym(2023, 7)));
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    fn yields_twelve_months_per_year_in_order(#[case] years: u32) {
        let batch = predict(&model(0.0, 0.0, 5.0), ym(2023, 2), years).unwrap();
        assert_eq!(batch.len(), (years * 12) as usize);
        assert_eq!(batch.predictions[0].period(), ym(2023, 3));
        assert!(
            batch
                .predictions
                .windows(2)
                .all(|w| w[0].period() < w[1].period())
        );
        assert_eq!(batch.last_observed, ym(2023, 2));
        assert_eq!(batch.horizon_years, years);
    }

    #[test]
    fn december_rolls_into_next_year() {
        let batch = predict(&model(0.0, 0.0, 0.0), ym(2023, 12), 1).unwrap();
        let first = batch.predictions.first().unwrap();
        let last = batch.predictions.last().unwrap();
        assert_eq!((first.year, first.month), (2024, 1));
        assert_eq!((last.year, last.month), (2024, 12));
    }

    #[test]
    fn zero_horizon_is_validation() {
        let err = predict(&model(0.0, 0.0, 0.0), ym(2023, 1), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[rstest]
    #[case(0.5, 0)]
    #[case(1.5, 2)]
    #[case(2.5, 2)]
    #[case(-0.5, 0)]
    #[case(2.4, 2)]
    #[case(2.6, 3)]
    fn rounds_ties_to_even(#[case] raw: f64, #[case] expected: i64) {
        assert_eq!(round_sales(raw), expected);
    }

    #[test]
    fn predictions_follow_the_model() {
        // sales = 10 * month
        let batch = predict(&model(0.0, 10.0, 0.0), ym(2023, 2), 1).unwrap();
        assert_eq!(batch.predictions[0].sales, 30);
        assert_eq!(batch.predictions[9].sales, 120);
        assert_eq!(batch.predictions[10].sales, 10);
    }

    #[rstest]
    #[case(0, 50, false)]
    #[case(1, 50, true)]
    #[case(50, 50, true)]
    #[case(51, 50, false)]
    fn horizon_bounds(#[case] horizon: u32, #[case] max: u32, #[case] ok: bool) {
        assert_eq!(check_horizon(horizon, max).is_ok(), ok);
    }
}
