//! Errors raised while building an import profile.
//!
//! These are contract violations between a header mapping and a schema.
//! Validation itself never fails; findings go into the report.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The mapping lacks a key the import kind depends on.
    #[error("header mapping has no entry for required key '{0}'")]
    MissingKey(String),

    /// A schema field cannot be located in the spreadsheet layout.
    #[error("schema field '{0}' has no header mapping entry")]
    UnmappedField(String),

    /// Two display headers normalize to the same column lookup.
    #[error("headers '{first}' and '{second}' are indistinguishable once normalized")]
    AmbiguousHeader { first: String, second: String },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
