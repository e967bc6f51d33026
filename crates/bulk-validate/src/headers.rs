//! Header schema validation.

use tracing::debug;

use bulk_ingest::{normalize_headers, trim_trailing_empty};
use bulk_model::{ColCoord, ErrorDescriptor, ErrorKind};

/// Compare an input header row with the expected headers.
///
/// Cells are compared in normalized form, so `expected` must be normalized
/// too. Cells that normalize to empty at the end of the row are ignored.
/// When the remaining cells differ from `expected`, each cell is classified
/// on its own: a known header in the wrong position yields
/// `invalidHeaderPosition`, anything else yields `excessHeader`. A single
/// intruder therefore also shifts every later header out of place; both
/// findings are kept. Findings name the cell as it was written.
pub fn validate_headers<S: AsRef<str>>(input: &[S], expected: &[String]) -> Vec<ErrorDescriptor> {
    let normalized = normalize_headers(input);
    let trimmed = trim_trailing_empty(&normalized);
    if trimmed == expected {
        return Vec::new();
    }

    let diagnostics: Vec<ErrorDescriptor> = trimmed
        .iter()
        .zip(input)
        .enumerate()
        .filter_map(|(idx, (cell, raw))| classify(cell, raw.as_ref(), idx, expected))
        .collect();
    debug!(
        input_columns = trimmed.len(),
        expected_columns = expected.len(),
        diagnostics = diagnostics.len(),
        "header row does not match"
    );
    diagnostics
}

fn classify(cell: &str, raw: &str, idx: usize, expected: &[String]) -> Option<ErrorDescriptor> {
    match expected.iter().position(|header| header == cell) {
        Some(expected_idx) if expected_idx == idx => None,
        Some(expected_idx) => Some(ErrorDescriptor::header(
            ErrorKind::InvalidHeaderPosition,
            ColCoord::at(idx)
                .with_expected_index(expected_idx)
                .with_name(raw),
        )),
        None => Some(ErrorDescriptor::header(
            ErrorKind::ExcessHeader,
            ColCoord::at(idx).with_name(raw),
        )),
    }
}
