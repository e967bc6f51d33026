//! Extra-field check.

use bulk_model::{ColCoord, ErrorDescriptor, ErrorKind, Record};

/// `extraField` for each non-empty source cell past the expected width.
///
/// Findings carry the cell content since the column has no header.
pub fn check(record: &Record, expected_len: usize) -> Vec<ErrorDescriptor> {
    record
        .original()
        .iter()
        .enumerate()
        .skip(expected_len)
        .filter(|(_, cell)| !cell.is_empty())
        .map(|(idx, cell)| {
            ErrorDescriptor::at_row(
                ErrorKind::ExtraField,
                record.index,
                ColCoord::at(idx).with_content(cell),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[&str]) -> Record {
        Record::new(
            2,
            Default::default(),
            cells.iter().map(|cell| (*cell).to_string()).collect(),
        )
    }

    #[test]
    fn reports_non_empty_surplus_cells() {
        let findings = check(&record(&["a", "b", "", "extra"]), 2);
        assert_eq!(
            findings,
            vec![ErrorDescriptor::at_row(
                ErrorKind::ExtraField,
                2,
                ColCoord::at(3).with_content("extra")
            )]
        );
    }

    #[test]
    fn rows_within_width_are_clean() {
        assert!(check(&record(&["a"]), 2).is_empty());
        assert!(check(&record(&["a", "b", ""]), 2).is_empty());
    }
}
