use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown validation rule '{0}'")]
    UnknownRule(String),
    #[error("unknown field type '{0}'")]
    UnknownFieldType(String),
    #[error("duplicate header key '{0}' in mapping")]
    DuplicateKey(String),
    #[error("duplicate header translation '{0}' in mapping")]
    DuplicateTranslation(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
