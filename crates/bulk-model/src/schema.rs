//! Per-field schemas for credential-data imports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Validation rule attached to a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleName {
    /// Cell must be non-empty.
    Required,
    /// Non-empty cell must parse as a date.
    IsDate,
    /// Non-empty cell must be a date on or before now.
    PastDate,
    /// Non-empty cell must be a date on or after now.
    FutureDate,
}

impl RuleName {
    pub const ALL: [RuleName; 4] = [
        RuleName::Required,
        RuleName::IsDate,
        RuleName::PastDate,
        RuleName::FutureDate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::Required => "required",
            RuleName::IsDate => "isDate",
            RuleName::PastDate => "pastDate",
            RuleName::FutureDate => "futureDate",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| ModelError::UnknownRule(s.to_string()))
    }
}

impl TryFrom<String> for RuleName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleName> for String {
    fn from(rule: RuleName) -> Self {
        rule.as_str().to_string()
    }
}

/// Declared content type of a credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    String,
    Date,
    Number,
    /// Attachment reference; never checked by rules.
    File,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::String,
        FieldType::Date,
        FieldType::Number,
        FieldType::File,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::File => "file",
        }
    }
}

impl FromStr for FieldType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|field_type| field_type.as_str() == s)
            .ok_or_else(|| ModelError::UnknownFieldType(s.to_string()))
    }
}

impl TryFrom<String> for FieldType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

/// Declared type and rule chain of one credential field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Rules applied in order; every rule runs even if an earlier one failed.
    #[serde(default)]
    pub validations: Vec<RuleName>,
}

impl FieldSchema {
    pub fn new(key: impl Into<String>, field_type: FieldType, validations: Vec<RuleName>) -> Self {
        Self {
            key: key.into(),
            field_type,
            validations,
        }
    }

    pub fn is_required(&self) -> bool {
        self.validations.contains(&RuleName::Required)
    }
}
