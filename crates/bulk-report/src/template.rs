//! CSV templates for bulk imports.

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use bulk_model::{HeaderMapping, ReferenceRecord};

use crate::error::{ReportError, Result};

/// Build CSV text for a header mapping.
///
/// The first line holds the display headers in mapping order. Each known
/// record adds one line with its values projected through the mapping;
/// missing keys become empty cells. Lines end with `\n` and the text has
/// no trailing newline. Quoting follows the `csv` crate: only cells with a
/// delimiter, quote or line break are quoted.
pub fn generate_template(
    mapping: &HeaderMapping,
    known: Option<&[ReferenceRecord]>,
) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(mapping.iter().map(|entry| entry.translation.as_str()))?;
    let records = known.unwrap_or_default();
    for record in records {
        writer.write_record(
            mapping
                .iter()
                .map(|entry| record.get(&entry.key).unwrap_or_default()),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ReportError::Flush(err.error().to_string()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    debug!(
        columns = mapping.len(),
        rows = records.len(),
        "generated import template"
    );
    Ok(text)
}
