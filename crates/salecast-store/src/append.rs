use salecast_core::{Dataset, RawRecord, RecordIssue, SalesRecord, ValidationError};

/// Validate `new_records` and append them after the records in `existing`.
///
/// The batch is all-or-nothing: a single bad record rejects every record in
/// it, and the error lists each offending field.
///
/// # Errors
///
/// Returns `ValidationError` when any record fails to parse or breaks the
/// month/finite-sales invariants.
pub fn append(existing: Dataset, new_records: &[RawRecord]) -> Result<Dataset, ValidationError> {
    let mut parsed = Vec::with_capacity(new_records.len());
    let mut issues: Vec<RecordIssue> = Vec::new();

    for (index, raw) in new_records.iter().enumerate() {
        let row = raw.row.unwrap_or(index + 1);
        match SalesRecord::parse(raw) {
            Ok(record) => parsed.push(record),
            Err(found) => issues.extend(found.into_iter().map(|issue| issue.at_row(Some(row)))),
        }
    }

    if !issues.is_empty() {
        tracing::debug!(rejected = issues.len(), "rejecting record batch");
        return Err(ValidationError::from_issues(issues));
    }

    existing.append(parsed)
}
