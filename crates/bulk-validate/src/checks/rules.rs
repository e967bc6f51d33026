//! Per-field rule chains for credential data.

use chrono::NaiveDateTime;

use bulk_model::{ErrorDescriptor, ErrorKind, Record, RuleName};

use super::cell_error;
use super::dates::{parse_date, start_of_day};
use crate::layout::Column;

/// Run one rule against a record's cell.
///
/// Date rules ignore empty cells; presence is the `required` rule's job.
/// A date is taken at the start of its day and compared with `now`
/// inclusively, so today is a valid past date but, after midnight, not a
/// valid future date.
pub fn apply(
    rule: RuleName,
    record: &Record,
    column: &Column,
    now: NaiveDateTime,
) -> Option<ErrorDescriptor> {
    let value = record.value(&column.lookup);
    let failed = match rule {
        RuleName::Required => value.is_none().then_some(ErrorKind::Required),
        RuleName::IsDate => date_rule(value, |_| true, ErrorKind::DateFormat),
        RuleName::PastDate => date_rule(value, |day| day <= now, ErrorKind::NotAPastDate),
        RuleName::FutureDate => date_rule(value, |day| day >= now, ErrorKind::NotAFutureDate),
    };
    failed.map(|kind| cell_error(kind, record, column))
}

/// Run a field's rule chain, accumulating every failure.
pub fn check(
    record: &Record,
    column: &Column,
    rules: impl IntoIterator<Item = RuleName>,
    now: NaiveDateTime,
) -> Vec<ErrorDescriptor> {
    rules
        .into_iter()
        .filter_map(|rule| apply(rule, record, column, now))
        .collect()
}

fn date_rule(
    value: Option<&str>,
    accept: impl Fn(NaiveDateTime) -> bool,
    rejected: ErrorKind,
) -> Option<ErrorKind> {
    match parse_date(value?) {
        None => Some(ErrorKind::DateFormat),
        Some(date) => (!accept(start_of_day(date))).then_some(rejected),
    }
}
