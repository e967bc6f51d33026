//! Header normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical form of a header cell.
///
/// Trims, collapses internal whitespace runs to one space and strips
/// diacritics (NFD decomposition, combining marks dropped). Case is kept.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut collapsed = String::with_capacity(trimmed.len());
    for (idx, part) in trimmed.split_whitespace().enumerate() {
        if idx > 0 {
            collapsed.push(' ');
        }
        collapsed.push_str(part);
    }
    collapsed
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect()
}

/// Normalize a whole header row, position for position.
pub fn normalize_headers<S: AsRef<str>>(row: &[S]) -> Vec<String> {
    row.iter().map(|cell| normalize_header(cell.as_ref())).collect()
}

/// Drop trailing empty cells so blank spreadsheet columns do not count.
pub fn trim_trailing_empty<S: AsRef<str>>(row: &[S]) -> &[S] {
    let end = row
        .iter()
        .rposition(|cell| !cell.as_ref().is_empty())
        .map_or(0, |idx| idx + 1);
    &row[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_strips_diacritics() {
        let row = ["fírstNámé", "lástNámé", "ËXTèrnàlÏD"];
        assert_eq!(
            normalize_headers(&row),
            vec!["firstName", "lastName", "EXTernalID"]
        );
    }

    #[test]
    fn test_normalize_header_whitespace() {
        assert_eq!(normalize_header("  Contact \t  Name  "), "Contact Name");
        assert_eq!(normalize_header("\u{feff}External ID"), "External ID");
        assert_eq!(normalize_header("   "), "");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn test_trim_trailing_empty() {
        let row = ["Contact Name", "", "External ID", "", ""];
        assert_eq!(trim_trailing_empty(&row), &row[..3]);
        let blank = ["", ""];
        assert!(trim_trailing_empty(&blank).is_empty());
        let none: [&str; 0] = [];
        assert!(trim_trailing_empty(&none).is_empty());
    }
}
