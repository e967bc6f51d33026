//! Tests for bulk-model wire shapes.

use std::collections::BTreeMap;

use serde_json::json;

use bulk_model::{
    ColCoord, ErrorDescriptor, ErrorKind, FieldSchema, FieldType, HeaderMapping, Record,
    ReferenceRecord, RuleName, ValidationResult,
};

#[test]
fn header_descriptor_serializes_with_negative_row() {
    let descriptor = ErrorDescriptor::header(
        ErrorKind::InvalidHeaderPosition,
        ColCoord::at(3).with_expected_index(1).with_name("External ID"),
    );
    let value = serde_json::to_value(&descriptor).expect("serialize descriptor");
    assert_eq!(
        value,
        json!({
            "error": "invalidHeaderPosition",
            "row": { "index": -1 },
            "col": { "index": 3, "expectedIndex": 1, "name": "External ID" }
        })
    );
    assert!(descriptor.is_header_level());
}

#[test]
fn external_id_kinds_keep_upper_case_suffix() {
    assert_eq!(
        serde_json::to_value(ErrorKind::UnexpectedExternalId).unwrap(),
        json!("unexpectedExternalID")
    );
    assert_eq!(
        serde_json::to_value(ErrorKind::NonexistentExternalId).unwrap(),
        json!("nonexistentExternalID")
    );
    assert_eq!(ErrorKind::NotAFutureDate.to_string(), "notAFutureDate");
}

#[test]
fn empty_file_result_shape() {
    let result = ValidationResult::empty_file();
    let value = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(
        value,
        json!({
            "validationErrors": [[
                { "error": "emptyFile", "row": { "index": 0 }, "col": { "index": 0 } }
            ]],
            "containsErrors": true
        })
    );
}

#[test]
fn contains_errors_tracks_non_empty_buckets() {
    assert!(!ValidationResult::new(vec![vec![], vec![]]).contains_errors);
    let result = ValidationResult::new(vec![
        vec![],
        vec![ErrorDescriptor::at_row(
            ErrorKind::Required,
            0,
            ColCoord::at(1).with_name("External ID"),
        )],
    ]);
    assert!(result.contains_errors);
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.count_of(ErrorKind::Required), 1);
}

#[test]
fn record_serializes_values_apart_from_row_metadata() {
    let mut values = BTreeMap::new();
    values.insert("Contact Name".to_string(), "Astrid Bernal".to_string());
    values.insert("index".to_string(), "7".to_string());
    values.insert("originalArray".to_string(), "x".to_string());
    let record = Record::new(
        0,
        values,
        vec![
            "Astrid Bernal".to_string(),
            "7".to_string(),
            "x".to_string(),
            "extra".to_string(),
        ],
    );
    let value = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(
        value,
        json!({
            "index": 0,
            "values": {
                "Contact Name": "Astrid Bernal",
                "index": "7",
                "originalArray": "x"
            },
            "originalArray": ["Astrid Bernal", "7", "x", "extra"]
        })
    );
    assert_eq!(record.value("Contact Name"), Some("Astrid Bernal"));
    assert_eq!(record.value("index"), Some("7"));
    assert_eq!(record.value("External ID"), None);
    assert!(!record.is_empty_row());
}

#[test]
fn schema_rejects_unknown_rule_names() {
    let parsed: Vec<FieldSchema> = serde_json::from_value(json!([
        { "key": "dateOfBirth", "type": "date", "validations": ["required", "pastDate"] },
        { "key": "photo", "type": "file" }
    ]))
    .expect("parse schema");
    assert_eq!(
        parsed[0],
        FieldSchema::new(
            "dateOfBirth",
            FieldType::Date,
            vec![RuleName::Required, RuleName::PastDate]
        )
    );
    assert!(parsed[1].validations.is_empty());

    let err = serde_json::from_value::<FieldSchema>(json!({
        "key": "award", "type": "string", "validations": ["requird"]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("unknown validation rule 'requird'"));
}

#[test]
fn mapping_deserializes_and_validates() {
    let mapping: HeaderMapping = serde_json::from_value(json!([
        { "key": "contactName", "translation": "Contact Name" },
        { "key": "externalId", "translation": "External ID" }
    ]))
    .expect("parse mapping");
    assert_eq!(mapping.len(), 2);

    let err = serde_json::from_value::<HeaderMapping>(json!([
        { "key": "contactName", "translation": "Name" },
        { "key": "externalId", "translation": "Name" }
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("duplicate header translation"));
}

#[test]
fn reference_records_are_plain_objects() {
    let contacts: Vec<ReferenceRecord> = serde_json::from_value(json!([
        { "externalId": "abc", "contactName": "Lyla Dodd" }
    ]))
    .expect("parse contacts");
    assert_eq!(contacts[0].get("contactName"), Some("Lyla Dodd"));
    let built: ReferenceRecord = [("externalId", "abc")].into_iter().collect();
    assert_eq!(built.get("externalId"), Some("abc"));
}
