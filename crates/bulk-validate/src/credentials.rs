//! Credential-data imports.
//!
//! A credential spreadsheet carries the common recipient columns (external
//! ID, contact name) followed by the fields of one credential type. Common
//! columns are always required and must agree with the selected recipients,
//! or with known contacts when no recipient was selected. Credential fields
//! follow their schema rule chains.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info_span, trace};

use bulk_model::{
    COMMON_CREDENTIAL_KEYS, EXTERNAL_ID_KEY, ErrorDescriptor, FieldSchema, HeaderMapping, Record,
    ReferenceRecord, RuleName, ValidationResult,
};

use crate::checks::{empty, extra, reference, required, rules};
use crate::clock::{Clock, SystemClock};
use crate::error::{ProfileError, Result};
use crate::layout::{Column, Layout};
use crate::report::{ImportOutcome, run, run_grid};

/// Reference data for the cross-reference check.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialReferences<'a> {
    /// Recipients selected for issuance. When empty, `contacts` is used.
    pub recipients: &'a [ReferenceRecord],
    /// Every known contact.
    pub contacts: &'a [ReferenceRecord],
}

#[derive(Debug, Clone)]
struct FieldRules {
    column: Column,
    required: bool,
    rules: Vec<RuleName>,
}

/// Validates spreadsheets of credential data for one credential type.
#[derive(Debug, Clone)]
pub struct CredentialImport {
    layout: Layout,
    external_id: Column,
    common: Vec<Column>,
    fields: Vec<FieldRules>,
    clock: Arc<dyn Clock>,
}

impl CredentialImport {
    /// Fails when the mapping lacks a common column or a schema field, or
    /// when two of its headers normalize alike.
    ///
    /// Schema entries for common keys are ignored; those columns have fixed
    /// rules.
    pub fn new(mapping: &HeaderMapping, schema: &[FieldSchema]) -> Result<Self> {
        let layout = Layout::from_mapping(mapping)?;
        let common = COMMON_CREDENTIAL_KEYS
            .iter()
            .map(|key| layout.require(key).cloned())
            .collect::<Result<Vec<_>>>()?;
        let external_id = layout.require(EXTERNAL_ID_KEY)?.clone();
        let fields = schema
            .iter()
            .filter(|field| !COMMON_CREDENTIAL_KEYS.contains(&field.key.as_str()))
            .map(|field| {
                let column = layout
                    .column(&field.key)
                    .ok_or_else(|| ProfileError::UnmappedField(field.key.clone()))?;
                Ok::<_, ProfileError>(FieldRules {
                    column: column.clone(),
                    required: field.is_required(),
                    rules: field.validations.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            columns = layout.len(),
            fields = fields.len(),
            "credential import profile built"
        );
        Ok(Self {
            layout,
            external_id,
            common,
            fields,
            clock: Arc::new(SystemClock),
        })
    }

    /// Use `clock` for past/future date rules.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Normalized display headers in expected order.
    pub fn expected_headers(&self) -> Vec<String> {
        self.layout.expected_headers()
    }

    /// Findings per record, in input order.
    pub fn validate_records(
        &self,
        records: &[Record],
        references: CredentialReferences<'_>,
    ) -> Vec<Vec<ErrorDescriptor>> {
        let now = self.clock.now();
        records
            .iter()
            .map(|record| self.validate_record(record, references, now))
            .collect()
    }

    fn validate_record(
        &self,
        record: &Record,
        references: CredentialReferences<'_>,
        now: NaiveDateTime,
    ) -> Vec<ErrorDescriptor> {
        if let Some(finding) = empty::check(record) {
            return vec![finding];
        }

        let required_columns = self.common.iter().chain(
            self.fields
                .iter()
                .filter(|field| field.required)
                .map(|field| &field.column),
        );
        let mut findings = required::check(record, required_columns);
        findings.extend(extra::check(record, self.layout.len()));

        for column in &self.common {
            let finding = if references.recipients.is_empty() {
                reference::contacts(record, column, &self.external_id, references.contacts)
            } else {
                reference::recipients(record, column, &self.external_id, references.recipients)
            };
            findings.extend(finding);
        }

        for field in &self.fields {
            let chain = field
                .rules
                .iter()
                .copied()
                .filter(|rule| *rule != RuleName::Required);
            findings.extend(rules::check(record, &field.column, chain, now));
        }

        trace!(index = record.index, findings = findings.len(), "credential checked");
        findings
    }

    /// Validate a header row and its mapped records.
    pub fn validate<S: AsRef<str>>(
        &self,
        input_headers: &[S],
        records: &[Record],
        references: CredentialReferences<'_>,
    ) -> ValidationResult {
        let span = info_span!("validate_credentials", records = records.len());
        let _guard = span.enter();
        run(
            input_headers,
            &self.expected_headers(),
            records,
            |batch| self.validate_records(batch, references),
        )
    }

    /// Map a raw grid and validate it.
    pub fn validate_grid<S: AsRef<str>>(
        &self,
        grid: &[Vec<S>],
        references: CredentialReferences<'_>,
    ) -> ImportOutcome {
        run_grid(grid, |headers, records| {
            self.validate(headers, records, references)
        })
    }
}
