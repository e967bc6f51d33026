//! Cell-addressable error report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Row index reserved for header-level diagnostics.
pub const HEADER_ROW_INDEX: i64 = -1;

/// Every kind of finding the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    EmptyFile,
    EmptyRow,
    ExcessHeader,
    InvalidHeaderPosition,
    Required,
    ExtraField,
    NotUnique,
    PreExisting,
    #[serde(rename = "unexpectedExternalID")]
    UnexpectedExternalId,
    #[serde(rename = "nonexistentExternalID")]
    NonexistentExternalId,
    ValueDoesNotMatch,
    DateFormat,
    NotAPastDate,
    NotAFutureDate,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::EmptyFile => "emptyFile",
            ErrorKind::EmptyRow => "emptyRow",
            ErrorKind::ExcessHeader => "excessHeader",
            ErrorKind::InvalidHeaderPosition => "invalidHeaderPosition",
            ErrorKind::Required => "required",
            ErrorKind::ExtraField => "extraField",
            ErrorKind::NotUnique => "notUnique",
            ErrorKind::PreExisting => "preExisting",
            ErrorKind::UnexpectedExternalId => "unexpectedExternalID",
            ErrorKind::NonexistentExternalId => "nonexistentExternalID",
            ErrorKind::ValueDoesNotMatch => "valueDoesNotMatch",
            ErrorKind::DateFormat => "dateFormat",
            ErrorKind::NotAPastDate => "notAPastDate",
            ErrorKind::NotAFutureDate => "notAFutureDate",
        }
    }

    /// Short human-readable explanation.
    pub fn describe(self) -> &'static str {
        match self {
            ErrorKind::EmptyFile => "file contains no data rows",
            ErrorKind::EmptyRow => "row is empty",
            ErrorKind::ExcessHeader => "unexpected column header",
            ErrorKind::InvalidHeaderPosition => "column header is out of place",
            ErrorKind::Required => "value is required",
            ErrorKind::ExtraField => "value outside the expected columns",
            ErrorKind::NotUnique => "value is repeated in this file",
            ErrorKind::PreExisting => "value already belongs to an existing contact",
            ErrorKind::UnexpectedExternalId => "external ID is not among the selected recipients",
            ErrorKind::NonexistentExternalId => "external ID does not match any contact",
            ErrorKind::ValueDoesNotMatch => "value does not match the expected record",
            ErrorKind::DateFormat => "value is not a valid date",
            ErrorKind::NotAPastDate => "date must not be in the future",
            ErrorKind::NotAFutureDate => "date must not be in the past",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCoord {
    pub index: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColCoord {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ColCoord {
    pub fn at(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_expected_index(mut self, expected_index: usize) -> Self {
        self.expected_index = Some(expected_index);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// A single finding attributed to exactly one (row, column) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub error: ErrorKind,
    pub row: RowCoord,
    pub col: ColCoord,
}

impl ErrorDescriptor {
    pub fn new(error: ErrorKind, row: i64, col: ColCoord) -> Self {
        Self {
            error,
            row: RowCoord { index: row },
            col,
        }
    }

    /// Finding on a data row.
    pub fn at_row(error: ErrorKind, row: usize, col: ColCoord) -> Self {
        let row = i64::try_from(row).unwrap_or(i64::MAX);
        Self::new(error, row, col)
    }

    /// Finding on the header row.
    pub fn header(error: ErrorKind, col: ColCoord) -> Self {
        Self::new(error, HEADER_ROW_INDEX, col)
    }

    pub fn is_header_level(&self) -> bool {
        self.row.index == HEADER_ROW_INDEX
    }
}

/// Outcome of one validation run.
///
/// `validation_errors[0]` is the header bucket; `validation_errors[i + 1]`
/// holds the findings for data row `i` when headers were valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub validation_errors: Vec<Vec<ErrorDescriptor>>,
    pub contains_errors: bool,
}

impl ValidationResult {
    pub fn new(validation_errors: Vec<Vec<ErrorDescriptor>>) -> Self {
        let contains_errors = validation_errors.iter().any(|bucket| !bucket.is_empty());
        Self {
            validation_errors,
            contains_errors,
        }
    }

    /// Canonical result for a file without data rows.
    pub fn empty_file() -> Self {
        Self::new(vec![vec![ErrorDescriptor::new(
            ErrorKind::EmptyFile,
            0,
            ColCoord::at(0),
        )]])
    }

    pub fn error_count(&self) -> usize {
        self.validation_errors.iter().map(Vec::len).sum()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ErrorDescriptor> {
        self.validation_errors.iter().flatten()
    }

    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.descriptors().filter(|d| d.error == kind).count()
    }
}
