//! Data model for the bulk spreadsheet import engine.
//!
//! Shared by ingestion, validation and report generation: expected column
//! layouts, per-field rule chains, mapped records, reference data and the
//! row-aligned error report consumed by UIs.

pub mod error;
pub mod mapping;
pub mod record;
pub mod report;
pub mod schema;

pub use error::{ModelError, Result};
pub use mapping::{
    COMMON_CREDENTIAL_KEYS, CONTACT_NAME_KEY, EXTERNAL_ID_KEY, HeaderEntry, HeaderMapping,
};
pub use record::{Record, ReferenceRecord};
pub use report::{
    ColCoord, ErrorDescriptor, ErrorKind, HEADER_ROW_INDEX, RowCoord, ValidationResult,
};
pub use schema::{FieldSchema, FieldType, RuleName};

/// A raw two-dimensional text grid. The first row holds the headers.
pub type RawGrid = Vec<Vec<String>>;
