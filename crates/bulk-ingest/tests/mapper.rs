//! Integration tests for grid parsing and record mapping.

use proptest::prelude::*;

use bulk_ingest::{GridOptions, map_rows, parse_grid, translate_to_keys, trim_empty_rows};
use bulk_model::{CONTACT_NAME_KEY, EXTERNAL_ID_KEY, HeaderMapping};

fn contact_mapping() -> HeaderMapping {
    HeaderMapping::from_pairs([
        (CONTACT_NAME_KEY, "Contact Name"),
        (EXTERNAL_ID_KEY, "External ID"),
    ])
    .expect("valid mapping")
}

#[test]
fn maps_and_translates_a_contact_file() {
    let text = "Contact Name,External ID\nAstrid Bernal,454cda5e-16d5-4b86-b903-535125f78fe1\n";
    let grid = parse_grid(text, &GridOptions::default()).expect("parse grid");
    let records = map_rows(&grid);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].index, 0);

    let keyed = translate_to_keys(&records, &contact_mapping());
    assert_eq!(keyed[0].get(CONTACT_NAME_KEY), Some("Astrid Bernal"));
    assert_eq!(
        keyed[0].get(EXTERNAL_ID_KEY),
        Some("454cda5e-16d5-4b86-b903-535125f78fe1")
    );
    assert_eq!(keyed[0].fields().len(), 2);
}

#[test]
fn diacritic_headers_map_to_plain_keys() {
    let text = "fírstNámé,lástNámé,ËXTèrnàlÏD\nAstrid,Bernal,454c\n";
    let grid = parse_grid(text, &GridOptions::default()).expect("parse grid");
    let records = map_rows(&grid);
    assert_eq!(records[0].get("firstName"), Some("Astrid"));
    assert_eq!(records[0].get("lastName"), Some("Bernal"));
    assert_eq!(records[0].get("EXTernalID"), Some("454c"));
}

#[test]
fn translate_back_skips_missing_cells() {
    let text = "Contact Name,External ID\nLyla Dodd\n";
    let grid = parse_grid(text, &GridOptions::default()).expect("parse grid");
    let keyed = translate_to_keys(&map_rows(&grid), &contact_mapping());
    assert_eq!(keyed[0].get(CONTACT_NAME_KEY), Some("Lyla Dodd"));
    assert_eq!(keyed[0].get(EXTERNAL_ID_KEY), None);
}

#[test]
fn trailing_comma_rows_are_trimmed() {
    let text = "A,B\n1,2\n,\n,\n";
    let grid = parse_grid(text, &GridOptions::default()).expect("parse grid");
    let records = map_rows(&grid);
    assert_eq!(records.len(), 3);
    assert_eq!(trim_empty_rows(&records).len(), 1);
}

proptest! {
    #[test]
    fn mapped_values_follow_cell_positions(
        headers in prop::collection::btree_set("[A-Za-z]{1,8}", 1..6),
        rows in prop::collection::vec(prop::collection::vec("[a-z0-9 ]{0,6}", 0..8), 0..10),
    ) {
        let headers: Vec<String> = headers.into_iter().collect();
        let mut grid = vec![headers.clone()];
        grid.extend(rows.iter().cloned());
        let records = map_rows(&grid);
        prop_assert_eq!(records.len(), rows.len());
        for (record, row) in records.iter().zip(&rows) {
            prop_assert_eq!(record.original(), row.as_slice());
            for (idx, header) in headers.iter().enumerate() {
                prop_assert_eq!(record.get(header), row.get(idx).map(String::as_str));
            }
        }
    }
}
