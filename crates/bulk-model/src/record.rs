//! Records produced by the mapper and reference data supplied by callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One data row keyed by normalized header.
///
/// Built once by the mapper and read-only afterwards. `original` keeps the
/// untouched source row so excess trailing cells can still be reported.
/// Cell values serialize under `values`, apart from the row metadata, so a
/// column may carry any header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// 0-based position among data rows.
    pub index: usize,
    values: BTreeMap<String, String>,
    #[serde(rename = "originalArray")]
    original: Vec<String>,
}

impl Record {
    pub fn new(index: usize, values: BTreeMap<String, String>, original: Vec<String>) -> Self {
        Self {
            index,
            values,
            original,
        }
    }

    /// Cell value for a normalized header, `None` when the row was too short.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Cell value treated the way validators see it: absent and empty are alike.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn original(&self) -> &[String] {
        &self.original
    }

    /// True when every source cell is empty.
    pub fn is_empty_row(&self) -> bool {
        self.original.iter().all(String::is_empty)
    }
}

/// Externally supplied record (pre-existing contact, selected recipient),
/// keyed by canonical field key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceRecord(BTreeMap<String, String>);

impl ReferenceRecord {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl<K, V> FromIterator<(K, V)> for ReferenceRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
