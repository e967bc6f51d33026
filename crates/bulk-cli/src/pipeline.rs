//! Validation runs over loaded inputs.

use anyhow::{Context, Result};
use tracing::info;

use bulk_model::{RawGrid, ReferenceRecord};
use bulk_report::{IssueRow, generate_template, issue_rows};
use bulk_validate::{ContactImport, CredentialImport, CredentialReferences, ImportOutcome};

use crate::profile::ImportProfile;

/// Which validation pipeline a spreadsheet goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Contacts,
    Credentials,
}

impl ImportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ImportKind::Contacts => "contacts",
            ImportKind::Credentials => "credentials",
        }
    }
}

/// Outcome of validating one spreadsheet.
#[derive(Debug)]
pub struct ImportRun {
    pub kind: ImportKind,
    pub outcome: ImportOutcome,
    pub issues: Vec<IssueRow>,
}

impl ImportRun {
    fn new(kind: ImportKind, outcome: ImportOutcome) -> Self {
        let issues = issue_rows(&outcome.result);
        info!(
            kind = kind.as_str(),
            records = outcome.records.len(),
            issues = issues.len(),
            "validation complete"
        );
        Self {
            kind,
            outcome,
            issues,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.outcome.result.contains_errors
    }
}

pub fn validate_contacts(
    profile: &ImportProfile,
    grid: &RawGrid,
    pre_existing: &[ReferenceRecord],
) -> Result<ImportRun> {
    let import = ContactImport::new(&profile.headers).context("build contact import")?;
    let outcome = import.validate_grid(grid, pre_existing);
    Ok(ImportRun::new(ImportKind::Contacts, outcome))
}

pub fn validate_credentials(
    profile: &ImportProfile,
    grid: &RawGrid,
    references: CredentialReferences<'_>,
) -> Result<ImportRun> {
    let import = CredentialImport::new(&profile.headers, &profile.fields)
        .context("build credential import")?;
    let outcome = import.validate_grid(grid, references);
    Ok(ImportRun::new(ImportKind::Credentials, outcome))
}

/// CSV template for a profile, pre-filled when records are given.
pub fn render_template(profile: &ImportProfile, known: &[ReferenceRecord]) -> Result<String> {
    let known = (!known.is_empty()).then_some(known);
    generate_template(&profile.headers, known).context("generate template")
}
