//! Error report assembly.

use tracing::debug;

use bulk_ingest::{map_rows, trim_empty_rows};
use bulk_model::{ErrorDescriptor, Record, ValidationResult};

use crate::headers::validate_headers;

/// Records and report from one validation run over a raw grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Mapped data rows, trailing empty rows removed.
    pub records: Vec<Record>,
    pub result: ValidationResult,
}

/// Merge header and record findings into a row-aligned report.
///
/// Header findings are a failed precondition: the report then holds only
/// the header bucket and `records` is never called. Otherwise the header
/// bucket is empty and one bucket per record follows.
pub fn assemble(
    header_findings: Vec<ErrorDescriptor>,
    records: impl FnOnce() -> Vec<Vec<ErrorDescriptor>>,
) -> ValidationResult {
    if !header_findings.is_empty() {
        return ValidationResult::new(vec![header_findings]);
    }
    let mut buckets = vec![Vec::new()];
    buckets.extend(records());
    ValidationResult::new(buckets)
}

/// Shared flow of every import kind: empty-file short-circuit, header
/// validation, then record validation over the trimmed batch.
pub(crate) fn run<S: AsRef<str>>(
    input_headers: &[S],
    expected: &[String],
    records: &[Record],
    validate_records: impl FnOnce(&[Record]) -> Vec<Vec<ErrorDescriptor>>,
) -> ValidationResult {
    let trimmed = trim_empty_rows(records);
    if trimmed.is_empty() {
        debug!("no data rows after trimming");
        return ValidationResult::empty_file();
    }
    let header_findings = validate_headers(input_headers, expected);
    let result = assemble(header_findings, || validate_records(trimmed));
    debug!(
        records = trimmed.len(),
        buckets = result.validation_errors.len(),
        findings = result.error_count(),
        "validation finished"
    );
    result
}

/// Map a raw grid and validate it with `validate`.
pub(crate) fn run_grid<S: AsRef<str>>(
    grid: &[Vec<S>],
    validate: impl FnOnce(&[S], &[Record]) -> ValidationResult,
) -> ImportOutcome {
    let mut records = map_rows(grid);
    let header_row = grid.first().map(Vec::as_slice).unwrap_or_default();
    let result = validate(header_row, &records);
    let kept = trim_empty_rows(&records).len();
    records.truncate(kept);
    ImportOutcome { records, result }
}
