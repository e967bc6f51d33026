//! Contact imports.

use tracing::{info_span, trace};

use bulk_model::{
    EXTERNAL_ID_KEY, ErrorDescriptor, HeaderMapping, Record, ReferenceRecord, ValidationResult,
};

use crate::checks::{empty, extra, reference, required, unique};
use crate::error::Result;
use crate::layout::{Column, Layout};
use crate::report::{ImportOutcome, run, run_grid};

/// Validates spreadsheets of new contacts.
///
/// Every mapped column is required. The external ID must be unique within
/// the file and must not belong to a pre-existing contact.
#[derive(Debug, Clone)]
pub struct ContactImport {
    layout: Layout,
    external_id: Column,
}

impl ContactImport {
    /// Fails when the mapping has no external ID entry or two of its
    /// headers normalize alike.
    pub fn new(mapping: &HeaderMapping) -> Result<Self> {
        let layout = Layout::from_mapping(mapping)?;
        let external_id = layout.require(EXTERNAL_ID_KEY)?.clone();
        Ok(Self {
            layout,
            external_id,
        })
    }

    /// Normalized display headers in expected order.
    pub fn expected_headers(&self) -> Vec<String> {
        self.layout.expected_headers()
    }

    /// Findings per record, in input order.
    pub fn validate_records(
        &self,
        records: &[Record],
        pre_existing: &[ReferenceRecord],
    ) -> Vec<Vec<ErrorDescriptor>> {
        records
            .iter()
            .map(|record| self.validate_record(record, records, pre_existing))
            .collect()
    }

    fn validate_record(
        &self,
        record: &Record,
        batch: &[Record],
        pre_existing: &[ReferenceRecord],
    ) -> Vec<ErrorDescriptor> {
        if let Some(finding) = empty::check(record) {
            return vec![finding];
        }
        let mut findings = required::check(record, self.layout.columns());
        findings.extend(extra::check(record, self.layout.len()));
        findings.extend(unique::check(record, batch, &self.external_id));
        findings.extend(reference::pre_existing(
            record,
            &self.external_id,
            pre_existing,
        ));
        trace!(index = record.index, findings = findings.len(), "contact checked");
        findings
    }

    /// Validate a header row and its mapped records.
    pub fn validate<S: AsRef<str>>(
        &self,
        input_headers: &[S],
        records: &[Record],
        pre_existing: &[ReferenceRecord],
    ) -> ValidationResult {
        let span = info_span!("validate_contacts", records = records.len());
        let _guard = span.enter();
        run(
            input_headers,
            &self.expected_headers(),
            records,
            |batch| self.validate_records(batch, pre_existing),
        )
    }

    /// Map a raw grid and validate it.
    pub fn validate_grid<S: AsRef<str>>(
        &self,
        grid: &[Vec<S>],
        pre_existing: &[ReferenceRecord],
    ) -> ImportOutcome {
        run_grid(grid, |headers, records| {
            self.validate(headers, records, pre_existing)
        })
    }
}
