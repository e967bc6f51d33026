//! Flattened report rows for tables and JSON output.

use serde::Serialize;

use bulk_model::{ErrorDescriptor, ErrorKind, ValidationResult};

/// One finding positioned the way a spreadsheet user sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRow {
    /// 1-based spreadsheet line; the header is line 1. `None` for
    /// file-level findings.
    pub line: Option<usize>,
    /// 1-based column.
    pub column: usize,
    pub kind: ErrorKind,
    /// Column header, when the finding has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub detail: String,
}

impl IssueRow {
    fn from_descriptor(descriptor: &ErrorDescriptor) -> Self {
        let line = match descriptor.error {
            ErrorKind::EmptyFile => None,
            _ if descriptor.is_header_level() => Some(1),
            _ => usize::try_from(descriptor.row.index).ok().map(|index| index + 2),
        };
        Self {
            line,
            column: descriptor.col.index + 1,
            kind: descriptor.error,
            header: descriptor.col.name.clone(),
            detail: detail(descriptor),
        }
    }
}

fn detail(descriptor: &ErrorDescriptor) -> String {
    let base = descriptor.error.describe();
    match (&descriptor.col.expected_index, &descriptor.col.content) {
        (Some(expected), _) => format!("{base}, expected in column {}", expected + 1),
        (None, Some(content)) => format!("{base}: \"{content}\""),
        (None, None) => base.to_string(),
    }
}

/// Flatten a report into display rows, in report order.
pub fn issue_rows(result: &ValidationResult) -> Vec<IssueRow> {
    result.descriptors().map(IssueRow::from_descriptor).collect()
}
