//! The per-user, append-only record collection.

use schemars::JsonSchema;
use serde::Serialize;

use crate::errors::{RecordIssue, ValidationError};
use crate::record::SalesRecord;

/// Historical sales records for one user, in append order.
///
/// Duplicate (year, month) pairs are allowed. Every record satisfies the
/// [`SalesRecord`] invariants; the only way to grow a dataset is
/// [`Dataset::append`], which re-checks them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a dataset from already-typed records.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any record breaks an invariant.
    pub fn from_records(records: Vec<SalesRecord>) -> Result<Self, ValidationError> {
        Self::new().append(records)
    }

    /// Return a new dataset with `batch` appended after the existing records.
    ///
    /// All-or-nothing: if any record is invalid, nothing is appended.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every offending record.
    pub fn append(
        mut self,
        batch: impl IntoIterator<Item = SalesRecord>,
    ) -> Result<Self, ValidationError> {
        let batch: Vec<SalesRecord> = batch.into_iter().collect();
        let issues: Vec<RecordIssue> = batch
            .iter()
            .enumerate()
            .filter_map(|(index, r)| {
                SalesRecord::new(r.year, r.month, r.sales)
                    .err()
                    .map(|issues| (index, issues))
            })
            .flat_map(|(index, issues)| {
                issues
                    .into_iter()
                    .map(move |issue| issue.at_row(Some(index + 1)))
            })
            .collect();

        if !issues.is_empty() {
            return Err(ValidationError::from_issues(issues));
        }

        self.records.extend(batch);
        Ok(self)
    }

    #[must_use]
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// Records in calendar order, for display and diagnostics.
    ///
    /// The sort is stable, so duplicate months keep their append order.
    /// The stored order is never changed.
    #[must_use]
    pub fn sorted_by_date(&self) -> Vec<SalesRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by_key(SalesRecord::period);
        sorted
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
