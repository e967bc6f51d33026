//! Empty-row check.

use bulk_model::{ColCoord, ErrorDescriptor, ErrorKind, Record};

/// `emptyRow` at column 0 when every source cell is empty.
///
/// An empty row short-circuits every other check for that record.
pub fn check(record: &Record) -> Option<ErrorDescriptor> {
    record
        .is_empty_row()
        .then(|| ErrorDescriptor::at_row(ErrorKind::EmptyRow, record.index, ColCoord::at(0)))
}
