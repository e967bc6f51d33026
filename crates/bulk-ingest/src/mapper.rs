//! Tabular-to-record mapping.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use bulk_model::{HeaderMapping, Record, ReferenceRecord};

use crate::header::{normalize_header, normalize_headers};

/// Turn a raw grid into records keyed by normalized header.
///
/// The first row is the header row. Cells past the header width live only
/// in the record's original row; short rows leave trailing keys absent.
pub fn map_rows<S: AsRef<str>>(grid: &[Vec<S>]) -> Vec<Record> {
    let Some((header_row, data_rows)) = grid.split_first() else {
        return Vec::new();
    };
    let keys = normalize_headers(header_row);
    let records: Vec<Record> = data_rows
        .iter()
        .enumerate()
        .map(|(index, row)| map_row(index, &keys, row))
        .collect();
    debug!(
        columns = keys.len(),
        records = records.len(),
        "mapped grid rows"
    );
    records
}

fn map_row<S: AsRef<str>>(index: usize, keys: &[String], row: &[S]) -> Record {
    let mut values = BTreeMap::new();
    for (key, cell) in keys.iter().zip(row) {
        values.insert(key.clone(), cell.as_ref().to_string());
    }
    let original: Vec<String> = row.iter().map(|cell| cell.as_ref().to_string()).collect();
    trace!(index, cells = original.len(), "mapped row");
    Record::new(index, values, original)
}

/// Drop trailing records whose source row is entirely empty.
///
/// Interior empty rows are kept so they can be reported.
pub fn trim_empty_rows(records: &[Record]) -> &[Record] {
    let end = records
        .iter()
        .rposition(|record| !record.is_empty_row())
        .map_or(0, |idx| idx + 1);
    &records[..end]
}

/// Re-key records by canonical field key, dropping unmapped columns.
pub fn translate_to_keys(records: &[Record], mapping: &HeaderMapping) -> Vec<ReferenceRecord> {
    let lookups: Vec<(&str, String)> = mapping
        .iter()
        .map(|entry| (entry.key.as_str(), normalize_header(&entry.translation)))
        .collect();
    records
        .iter()
        .map(|record| {
            lookups
                .iter()
                .filter_map(|(key, header)| record.get(header).map(|value| (*key, value)))
                .collect()
        })
        .collect()
}

/// True when none of the given keys holds a value.
pub fn is_empty_entry<'a>(entry: &ReferenceRecord, keys: impl IntoIterator<Item = &'a str>) -> bool {
    keys.into_iter()
        .all(|key| entry.get(key).is_none_or(str::is_empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn test_map_rows_short_and_long_rows() {
        let records = map_rows(&grid(&[
            &["Contact Name", "External ID"],
            &["Lyla Dodd"],
            &["Astrid Bernal", "454c", "surplus"],
        ]));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Contact Name"), Some("Lyla Dodd"));
        assert_eq!(records[0].get("External ID"), None);
        assert_eq!(records[1].index, 1);
        assert_eq!(records[1].values().len(), 2);
        assert_eq!(records[1].original().len(), 3);
    }

    #[test]
    fn test_map_rows_empty_grid() {
        let empty: Vec<Vec<String>> = Vec::new();
        assert!(map_rows(&empty).is_empty());
        assert!(map_rows(&grid(&[&["Contact Name"]])).is_empty());
    }

    #[test]
    fn test_trim_empty_rows_keeps_interior_blanks() {
        let records = map_rows(&grid(&[
            &["A", "B"],
            &["1", "2"],
            &["", ""],
            &["3", "4"],
            &["", ""],
            &[],
        ]));
        let trimmed = trim_empty_rows(&records);
        assert_eq!(trimmed.len(), 3);
        assert!(trimmed[1].is_empty_row());

        let blanks = map_rows(&grid(&[&["A"], &[""], &[]]));
        assert!(trim_empty_rows(&blanks).is_empty());
    }

    #[test]
    fn test_is_empty_entry() {
        let entry: ReferenceRecord = [("externalId", ""), ("contactName", "")]
            .into_iter()
            .collect();
        assert!(is_empty_entry(&entry, ["externalId", "contactName", "award"]));
        let filled: ReferenceRecord = [("award", "Honors")].into_iter().collect();
        assert!(!is_empty_entry(&filled, ["externalId", "award"]));
    }
}
