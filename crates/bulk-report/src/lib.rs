//! Bulk import outputs.
//!
//! - **Templates**: CSV text built from a header mapping, optionally
//!   pre-filled with known records. Parsing the text back and mapping it
//!   reproduces the records.
//! - **Issue rows**: a validation report flattened into spreadsheet
//!   positions for table or JSON rendering.

mod error;
mod issues;
mod template;

pub use error::{ReportError, Result};
pub use issues::{IssueRow, issue_rows};
pub use template::generate_template;
