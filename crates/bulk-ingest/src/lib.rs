//! Bulk import ingestion.
//!
//! Turns uploaded spreadsheet text into structured records:
//!
//! - **Grid parsing**: CSV text to rows of cells, flexible row widths
//! - **Header normalization**: trimmed, whitespace-collapsed, diacritic-free keys
//! - **Record mapping**: header keys zipped onto each data row, source row kept
//! - **Translate-back**: records re-keyed by canonical field keys
//!
//! # Example
//!
//! ```ignore
//! use bulk_ingest::{GridOptions, map_rows, parse_grid};
//!
//! let grid = parse_grid("Contact Name,External ID\nAstrid Bernal,454c\n", &GridOptions::default())?;
//! let records = map_rows(&grid);
//! assert_eq!(records[0].get("External ID"), Some("454c"));
//! ```

mod error;
mod grid;
mod header;
mod mapper;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use grid::{GridOptions, parse_grid};

// === Headers ===
pub use header::{normalize_header, normalize_headers, trim_trailing_empty};

// === Records ===
pub use mapper::{is_empty_entry, map_rows, translate_to_keys, trim_empty_rows};
