//! Header mappings between canonical field keys and spreadsheet headers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Canonical key of the external identifier column.
pub const EXTERNAL_ID_KEY: &str = "externalId";

/// Canonical key of the contact name column.
pub const CONTACT_NAME_KEY: &str = "contactName";

/// Fields every credential-data import carries, in header order.
pub const COMMON_CREDENTIAL_KEYS: &[&str] = &[EXTERNAL_ID_KEY, CONTACT_NAME_KEY];

/// One column of a spreadsheet layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    /// Canonical field identifier used internally.
    pub key: String,
    /// Header text displayed in the spreadsheet.
    pub translation: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            translation: translation.into(),
        }
    }
}

/// Ordered list of expected columns.
///
/// Order is significant: it defines the expected header positions.
/// Keys and translations are each unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HeaderEntry>", into = "Vec<HeaderEntry>")]
pub struct HeaderMapping {
    entries: Vec<HeaderEntry>,
}

impl HeaderMapping {
    /// Build a mapping, rejecting duplicate keys or translations.
    pub fn new(entries: Vec<HeaderEntry>) -> Result<Self> {
        let mut keys = BTreeSet::new();
        let mut translations = BTreeSet::new();
        for entry in &entries {
            if !keys.insert(entry.key.as_str()) {
                return Err(ModelError::DuplicateKey(entry.key.clone()));
            }
            if !translations.insert(entry.translation.as_str()) {
                return Err(ModelError::DuplicateTranslation(entry.translation.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Convenience constructor from `(key, translation)` pairs.
    pub fn from_pairs<K, T>(pairs: impl IntoIterator<Item = (K, T)>) -> Result<Self>
    where
        K: Into<String>,
        T: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(key, translation)| HeaderEntry::new(key, translation))
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeaderEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<HeaderEntry>> for HeaderMapping {
    type Error = ModelError;

    fn try_from(entries: Vec<HeaderEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<HeaderMapping> for Vec<HeaderEntry> {
    fn from(mapping: HeaderMapping) -> Self {
        mapping.entries
    }
}

impl<'a> IntoIterator for &'a HeaderMapping {
    type Item = &'a HeaderEntry;
    type IntoIter = std::slice::Iter<'a, HeaderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
