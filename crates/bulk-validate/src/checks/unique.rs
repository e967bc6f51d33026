//! Intra-batch uniqueness check.
//!
//! Every record is compared with every other record of the batch, so a run
//! costs O(n²) in the batch size. Import files are bounded by upload limits.

use bulk_model::{ErrorDescriptor, ErrorKind, Record};

use super::cell_error;
use crate::layout::Column;

/// `notUnique` when another record of the batch has the same non-empty value.
pub fn check(record: &Record, batch: &[Record], column: &Column) -> Option<ErrorDescriptor> {
    let value = record.value(&column.lookup)?;
    batch
        .iter()
        .any(|other| other.index != record.index && other.get(&column.lookup) == Some(value))
        .then(|| cell_error(ErrorKind::NotUnique, record, column))
}
