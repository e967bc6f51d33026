//! Expected spreadsheet columns derived from a header mapping.

use std::collections::BTreeMap;

use bulk_ingest::normalize_header;
use bulk_model::HeaderMapping;

use crate::error::{ProfileError, Result};

/// One expected column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Column {
    /// Canonical field key.
    pub key: String,
    /// Display header, used as the column name in findings.
    pub name: String,
    /// Normalized display header, the record key for this column.
    pub lookup: String,
    /// Expected 0-based position.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    columns: Vec<Column>,
}

impl Layout {
    /// Fails when two translations share a normalized lookup, since their
    /// cells would land under one record key.
    pub fn from_mapping(mapping: &HeaderMapping) -> Result<Self> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        let mut columns = Vec::with_capacity(mapping.len());
        for (position, entry) in mapping.iter().enumerate() {
            let lookup = normalize_header(&entry.translation);
            if let Some(first) = seen.insert(lookup.clone(), &entry.translation) {
                return Err(ProfileError::AmbiguousHeader {
                    first: first.to_string(),
                    second: entry.translation.clone(),
                });
            }
            columns.push(Column {
                key: entry.key.clone(),
                name: entry.translation.clone(),
                lookup,
                position,
            });
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Normalized headers in expected order.
    pub fn expected_headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.lookup.clone())
            .collect()
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn require(&self, key: &str) -> Result<&Column> {
        self.column(key)
            .ok_or_else(|| ProfileError::MissingKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_carry_lookup_and_position() {
        let mapping =
            HeaderMapping::from_pairs([("award", "Récompense"), ("externalId", "External  ID")])
                .unwrap();
        let layout = Layout::from_mapping(&mapping).unwrap();
        assert_eq!(layout.len(), 2);
        let award = layout.column("award").unwrap();
        assert_eq!(award.lookup, "Recompense");
        assert_eq!(award.name, "Récompense");
        assert_eq!(layout.column("externalId").unwrap().position, 1);
        assert_eq!(layout.expected_headers(), vec!["Recompense", "External ID"]);
        assert_eq!(
            layout.require("contactName"),
            Err(ProfileError::MissingKey("contactName".to_string()))
        );
    }

    #[test]
    fn translations_equal_after_normalization_are_rejected() {
        let mapping = HeaderMapping::from_pairs([
            ("resume", "Résumé"),
            ("resumeAlt", "Resume"),
        ])
        .unwrap();
        assert_eq!(
            Layout::from_mapping(&mapping),
            Err(ProfileError::AmbiguousHeader {
                first: "Résumé".to_string(),
                second: "Resume".to_string(),
            })
        );

        let spaced =
            HeaderMapping::from_pairs([("a", "Contact Name"), ("b", "Contact  Name")]).unwrap();
        assert!(matches!(
            Layout::from_mapping(&spaced),
            Err(ProfileError::AmbiguousHeader { .. })
        ));
    }
}
