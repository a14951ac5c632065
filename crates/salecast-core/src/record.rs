//! Sales records, raw and validated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;
use crate::errors::RecordIssue;

/// Earliest year accepted for a record.
pub const MIN_YEAR: i32 = 1;
/// Latest year accepted for a record.
pub const MAX_YEAR: i32 = 9999;

/// One month of observed sales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SalesRecord {
    pub year: i32,
    pub month: u32,
    pub sales: f64,
}

impl SalesRecord {
    /// Build a record from typed values, checking the record invariants.
    ///
    /// # Errors
    ///
    /// Returns every field that violates an invariant.
    pub fn new(year: i32, month: u32, sales: f64) -> Result<Self, Vec<RecordIssue>> {
        let mut issues = Vec::new();
        check_ranges(Some(year), Some(month), Some(sales), &mut issues);
        if issues.is_empty() {
            Ok(Self { year, month, sales })
        } else {
            Err(issues)
        }
    }

    /// Parse and validate a raw record.
    ///
    /// # Errors
    ///
    /// Returns every unparseable or out-of-range field, tagged with the
    /// raw record's row number.
    pub fn parse(raw: &RawRecord) -> Result<Self, Vec<RecordIssue>> {
        let mut issues = Vec::new();
        let year = parse_field::<i32>("year", &raw.year, "is not an integer", &mut issues);
        let month = parse_field::<u32>("month", &raw.month, "is not an integer", &mut issues);
        let sales = parse_field::<f64>("sales", &raw.sales, "is not a number", &mut issues);
        check_ranges(year, month, sales, &mut issues);

        match (year, month, sales) {
            (Some(year), Some(month), Some(sales)) if issues.is_empty() => {
                Ok(Self { year, month, sales })
            }
            _ => Err(tag_rows(issues, raw.row)),
        }
    }

    #[must_use]
    pub const fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}

fn parse_field<T: std::str::FromStr>(
    field: &str,
    value: &str,
    reason: &str,
    issues: &mut Vec<RecordIssue>,
) -> Option<T> {
    let parsed = value.trim().parse::<T>().ok();
    if parsed.is_none() {
        issues.push(RecordIssue::new(field, value, reason));
    }
    parsed
}

fn check_ranges(
    year: Option<i32>,
    month: Option<u32>,
    sales: Option<f64>,
    issues: &mut Vec<RecordIssue>,
) {
    if let Some(year) = year.filter(|y| !(MIN_YEAR..=MAX_YEAR).contains(y)) {
        issues.push(RecordIssue::new(
            "year",
            &year.to_string(),
            format!("must be between {MIN_YEAR} and {MAX_YEAR}"),
        ));
    }
    if let Some(month) = month.filter(|m| !(1..=12).contains(m)) {
        issues.push(RecordIssue::new(
            "month",
            &month.to_string(),
            "must be between 1 and 12",
        ));
    }
    if let Some(sales) = sales.filter(|s| !s.is_finite()) {
        issues.push(RecordIssue::new(
            "sales",
            &sales.to_string(),
            "is not a finite number",
        ));
    }
}

fn tag_rows(issues: Vec<RecordIssue>, row: Option<usize>) -> Vec<RecordIssue> {
    issues.into_iter().map(|issue| issue.at_row(row)).collect()
}

/// An unvalidated record as received from a form or a CSV cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub year: String,
    pub month: String,
    pub sales: String,
    /// 1-based data row in the source file, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
}

impl RawRecord {
    pub fn new(year: impl Into<String>, month: impl Into<String>, sales: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            sales: sales.into(),
            row: None,
        }
    }

    #[must_use]
    pub const fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

impl From<SalesRecord> for RawRecord {
    fn from(record: SalesRecord) -> Self {
        Self::new(
            record.year.to_string(),
            record.month.to_string(),
            record.sales.to_string(),
        )
    }
}
