//! Error types for bulk import ingestion.

use thiserror::Error;

/// Errors that can occur while turning CSV text into a grid.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Malformed CSV text.
    #[error("failed to parse CSV at line {line}: {message}")]
    CsvParse { line: u64, message: String },

    /// Delimiter must be a single-byte character.
    #[error("unsupported delimiter {0:?}: must be a single ASCII character")]
    InvalidDelimiter(char),
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        Self::CsvParse {
            line,
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
