//! Uploaded CSV parsing.

use std::io::Read;
use std::path::Path;

use salecast_core::{RawRecord, ValidationError};

use crate::error::StoreError;

/// Columns an upload (and a persisted dataset) must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["year", "month", "sales"];

/// Reject uploads whose file name does not end in `.csv`.
///
/// # Errors
///
/// Returns `ValidationError` for any other extension.
pub fn ensure_csv_file_name(file_name: &str) -> Result<(), ValidationError> {
    let is_csv = Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Ok(())
    } else {
        Err(ValidationError::message(format!(
            "'{file_name}' is not a .csv file"
        )))
    }
}

/// Read an uploaded CSV into raw records.
///
/// Headers are matched after trimming; column order is free and extra
/// columns are ignored. Each record carries its 1-based data row number.
///
/// # Errors
///
/// - `StoreError::Validation` when a required column is missing.
/// - `StoreError::Csv` when the file is not well-formed CSV.
pub fn read_upload<R: Read>(reader: R) -> Result<Vec<RawRecord>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut indices = [0usize; 3];
    let mut missing = Vec::new();
    for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h == column) {
            Some(index) => *slot = index,
            None => missing.push(column),
        }
    }

    if !missing.is_empty() {
        return Err(ValidationError::message(format!(
            "CSV must have columns: {} (missing: {})",
            REQUIRED_COLUMNS.join(", "),
            missing.join(", ")
        ))
        .into());
    }

    let [year, month, sales] = indices;
    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let cell = |i: usize| row.get(i).unwrap_or_default().to_string();
        records.push(RawRecord::new(cell(year), cell(month), cell(sales)).with_row(index + 1));
    }

    tracing::debug!(rows = records.len(), "parsed uploaded csv");
    Ok(records)
}
