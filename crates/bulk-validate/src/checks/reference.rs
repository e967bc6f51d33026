//! Cross-reference checks against caller-supplied datasets.
//!
//! Reference records are keyed by canonical field key while imported
//! records are keyed by normalized display header; each check bridges the
//! two through the column layout. Costs are O(n·m) in batch and reference
//! sizes.

use bulk_model::{ErrorDescriptor, ErrorKind, Record, ReferenceRecord};

use super::cell_error;
use crate::layout::Column;

/// `preExisting` when the record's value already belongs to a known contact.
pub fn pre_existing(
    record: &Record,
    column: &Column,
    contacts: &[ReferenceRecord],
) -> Option<ErrorDescriptor> {
    let value = record.value(&column.lookup)?;
    contacts
        .iter()
        .any(|contact| contact.get(&column.key) == Some(value))
        .then(|| cell_error(ErrorKind::PreExisting, record, column))
}

/// Match a common field against the selected recipients.
///
/// A recipient matches when both the field value and the external ID agree.
/// The external ID column reports `unexpectedExternalID`, any other column
/// `valueDoesNotMatch`.
pub fn recipients(
    record: &Record,
    column: &Column,
    id_column: &Column,
    selected: &[ReferenceRecord],
) -> Option<ErrorDescriptor> {
    let value = record.value(&column.lookup)?;
    let external_id = record.get(&id_column.lookup);
    let matched = selected.iter().any(|recipient| {
        recipient.get(&column.key) == Some(value) && recipient.get(&id_column.key) == external_id
    });
    if matched {
        return None;
    }
    let kind = if column.key == id_column.key {
        ErrorKind::UnexpectedExternalId
    } else {
        ErrorKind::ValueDoesNotMatch
    };
    Some(cell_error(kind, record, column))
}

/// Match a common field against known contacts, used when no recipients
/// were selected.
///
/// An external ID no contact has reports `nonexistentExternalID`. Another
/// field reports `valueDoesNotMatch` only when the contact owning the
/// external ID has a different non-empty value for it.
pub fn contacts(
    record: &Record,
    column: &Column,
    id_column: &Column,
    known: &[ReferenceRecord],
) -> Option<ErrorDescriptor> {
    let value = record.value(&column.lookup)?;
    let external_id = record.get(&id_column.lookup);
    let owner = known
        .iter()
        .find(|contact| external_id.is_some() && contact.get(&id_column.key) == external_id);

    if column.key == id_column.key {
        return owner
            .is_none()
            .then(|| cell_error(ErrorKind::NonexistentExternalId, record, column));
    }

    let expected = owner
        .and_then(|contact| contact.get(&column.key))
        .filter(|expected| !expected.is_empty())?;
    (expected != value).then(|| cell_error(ErrorKind::ValueDoesNotMatch, record, column))
}
