//! Date parsing for credential fields.
//!
//! Dates are written day first: `DD/MM/YYYY`. Day and month may have one
//! or two digits and `-` or `.` are accepted in place of `/`. The year
//! must have four digits.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Expected date layout, for messages.
pub const DATE_FORMAT: &str = "DD/MM/YYYY";

/// Parse a day-first date, `None` when the text is not a calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().split(['/', '-', '.']);
    let day = parse_part(parts.next()?, 1..=2)?;
    let month = parse_part(parts.next()?, 1..=2)?;
    let year = parse_part(parts.next()?, 4..=4)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_part(part: &str, digits: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !digits.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Start of the given day.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
