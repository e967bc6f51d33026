//! Record check modules.
//!
//! Each module performs one kind of check on a single record and returns
//! its findings. The import pipelines in `contacts` and `credentials` decide
//! which checks run and in what order.

pub mod dates;
pub mod empty;
pub mod extra;
pub mod reference;
pub mod required;
pub mod rules;
pub mod unique;

use bulk_model::{ColCoord, ErrorDescriptor, ErrorKind, Record};

use crate::layout::Column;

/// Finding addressed at a record's cell in an expected column.
pub(crate) fn cell_error(kind: ErrorKind, record: &Record, column: &Column) -> ErrorDescriptor {
    ErrorDescriptor::at_row(
        kind,
        record.index,
        ColCoord::at(column.position).with_name(&column.name),
    )
}
