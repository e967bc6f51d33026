//! Required-field check.

use bulk_model::{ErrorDescriptor, ErrorKind, Record};

use super::cell_error;
use crate::layout::Column;

/// `required` for each column whose value is absent or empty.
pub fn check<'a>(
    record: &Record,
    columns: impl IntoIterator<Item = &'a Column>,
) -> Vec<ErrorDescriptor> {
    columns
        .into_iter()
        .filter(|column| record.value(&column.lookup).is_none())
        .map(|column| cell_error(ErrorKind::Required, record, column))
        .collect()
}
