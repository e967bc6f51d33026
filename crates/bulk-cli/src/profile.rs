//! Import profiles and reference data loaded from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use bulk_ingest::{GridOptions, parse_grid};
use bulk_model::{FieldSchema, HeaderMapping, RawGrid, ReferenceRecord};

/// Spreadsheet layout for one import kind.
///
/// ```json
/// {
///   "headers": [{ "key": "externalId", "translation": "External ID" }],
///   "fields": [{ "key": "award", "type": "string", "validations": ["required"] }]
/// }
/// ```
///
/// `fields` is only meaningful for credential imports and may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportProfile {
    pub headers: HeaderMapping,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl ImportProfile {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parse import profile")
    }
}

pub fn load_profile(path: &Path) -> Result<ImportProfile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read import profile {}", path.display()))?;
    let profile = ImportProfile::from_json(&text)
        .with_context(|| format!("load import profile {}", path.display()))?;
    debug!(
        columns = profile.headers.len(),
        fields = profile.fields.len(),
        "loaded import profile"
    );
    Ok(profile)
}

/// Load a JSON array of records keyed by canonical field key.
pub fn load_references(path: &Path) -> Result<Vec<ReferenceRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read reference data {}", path.display()))?;
    let records: Vec<ReferenceRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parse reference data {}", path.display()))?;
    debug!(records = records.len(), path = %path.display(), "loaded reference data");
    Ok(records)
}

/// Load reference data when a path was given.
pub fn load_optional_references(path: Option<&Path>) -> Result<Vec<ReferenceRecord>> {
    path.map_or_else(|| Ok(Vec::new()), load_references)
}

/// Read a CSV file into a raw grid.
pub fn read_grid(path: &Path, delimiter: char) -> Result<RawGrid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read spreadsheet {}", path.display()))?;
    let options = GridOptions::default().with_delimiter(delimiter)?;
    parse_grid(&text, &options).with_context(|| format!("parse spreadsheet {}", path.display()))
}
