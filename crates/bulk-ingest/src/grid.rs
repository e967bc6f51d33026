//! CSV text to raw grid.

use csv::ReaderBuilder;
use tracing::debug;

use bulk_model::RawGrid;

use crate::error::{IngestError, Result};

/// Options for reading CSV text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl GridOptions {
    /// Use a different delimiter. Only ASCII delimiters are supported.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        self.delimiter =
            u8::try_from(delimiter).map_err(|_| IngestError::InvalidDelimiter(delimiter))?;
        if !self.delimiter.is_ascii() {
            return Err(IngestError::InvalidDelimiter(delimiter));
        }
        Ok(self)
    }
}

/// Parse CSV text into rows of cells.
///
/// Rows keep their own width; blank lines are skipped. Cells are not
/// trimmed, the header normalizer does that for headers only.
pub fn parse_grid(text: &str, options: &GridOptions) -> Result<RawGrid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(text.as_bytes());
    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    debug!(rows = grid.len(), "parsed csv grid");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid_flexible_rows() {
        let grid = parse_grid(
            "Contact Name,External ID\nAstrid Bernal,454c\nLyla Dodd\n\n",
            &GridOptions::default(),
        )
        .expect("parse grid");
        assert_eq!(
            grid,
            vec![
                vec!["Contact Name", "External ID"],
                vec!["Astrid Bernal", "454c"],
                vec!["Lyla Dodd"],
            ]
        );
    }

    #[test]
    fn test_parse_grid_quoted_values() {
        let grid = parse_grid(
            "Name;Note\n\"Bernal; Astrid\";\"said \"\"hi\"\"\"\n",
            &GridOptions::default().with_delimiter(';').unwrap(),
        )
        .expect("parse grid");
        assert_eq!(grid[1], vec!["Bernal; Astrid", "said \"hi\""]);
    }

    #[test]
    fn test_parse_grid_empty_text() {
        let grid = parse_grid("", &GridOptions::default()).expect("parse grid");
        assert!(grid.is_empty());
    }

    #[test]
    fn test_rejects_multibyte_delimiter() {
        assert!(matches!(
            GridOptions::default().with_delimiter('§'),
            Err(IngestError::InvalidDelimiter('§'))
        ));
    }
}
