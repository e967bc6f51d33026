//! Bulk import validation.
//!
//! Checks mapped spreadsheet records before they are imported and produces
//! a row-aligned report of cell-addressed findings:
//!
//! 1. A batch with no data rows is reported as `emptyFile`.
//! 2. The header row is compared with the expected headers. Any finding
//!    there stops validation.
//! 3. Each record runs its import kind's check pipeline and all findings
//!    are kept.
//!
//! Two import kinds exist: [`ContactImport`] for new contacts and
//! [`CredentialImport`] for credential data of one credential type.
//! Building either can fail with a [`ProfileError`]; validating never fails.

mod checks;
mod clock;
mod contacts;
mod credentials;
mod error;
mod headers;
mod layout;
mod report;

pub use checks::dates::{DATE_FORMAT, parse_date};
pub use clock::{Clock, FixedClock, SystemClock};
pub use contacts::ContactImport;
pub use credentials::{CredentialImport, CredentialReferences};
pub use error::{ProfileError, Result};
pub use headers::validate_headers;
pub use report::{ImportOutcome, assemble};
