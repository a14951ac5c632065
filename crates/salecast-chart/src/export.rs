//! CSV download of the current prediction batch.

use salecast_core::PredictionBatch;

use crate::error::ChartError;

pub const EXPORT_FILE_NAME: &str = "predicted_sales.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

/// Serialize `batch` as CSV with header `year,month,sales`.
///
/// # Errors
///
/// Returns `ChartError::NoData` when there is no batch, or a CSV/I/O error
/// if writing to the in-memory buffer fails.
pub fn export_csv(batch: Option<&PredictionBatch>) -> Result<Vec<u8>, ChartError> {
    let batch = batch.ok_or(ChartError::NoData)?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    if batch.is_empty() {
        writer.write_record(["year", "month", "sales"])?;
    }
    for prediction in batch.iter() {
        writer.serialize(prediction)?;
    }
    let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;

    tracing::debug!(rows = batch.len(), bytes = bytes.len(), "exported predictions");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use salecast_core::{ErrorKind, Prediction, YearMonth};

    use super::*;

    #[test]
    fn no_batch_is_no_data() {
        let err = export_csv(None).unwrap_err();
        assert!(matches!(err, ChartError::NoData));
        assert_eq!(err.kind(), ErrorKind::NoData);
    }

    #[test]
    fn writes_header_and_integer_sales() {
        let batch = PredictionBatch {
            last_observed: YearMonth::new(2023, 2).unwrap(),
            horizon_years: 1,
            predictions: vec![Prediction { year: 2023, month: 3, sales: 188 }],
        };
        let text = String::from_utf8(export_csv(Some(&batch)).unwrap()).unwrap();
        assert_eq!(text, "year,month,sales\n2023,3,188\n");
    }

    #[test]
    fn empty_batch_still_has_header() {
        let batch = PredictionBatch {
            last_observed: YearMonth::new(2023, 2).unwrap(),
            horizon_years: 1,
            predictions: Vec::new(),
        };
        let text = String::from_utf8(export_csv(Some(&batch)).unwrap()).unwrap();
        assert_eq!(text, "year,month,sales\n");
    }
}
