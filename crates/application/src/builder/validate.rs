//! Header row validation

use std::sync::LazyLock;

use courier_domain::ValidationError;
use courier_domain::request::FieldRow;
use regex::Regex;

/// Header names the composer refuses to set.
pub const RESERVED_HEADERS: &[&str] = &["host", "content-length", "origin", "referer"];

#[allow(clippy::expect_used)]
static HEADER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+\-.^_`|~]+$").expect("valid regex")
});

/// Returns true if `name` is a valid header field name token.
#[must_use]
pub fn is_valid_header_name(name: &str) -> bool {
    HEADER_NAME.is_match(name)
}

/// Checks every enabled header row and returns all violations in order.
///
/// Disabled rows are skipped. An enabled row may report several
/// violations; nothing short-circuits. Row numbers in messages are
/// 1-based positions in `rows`.
#[must_use]
pub fn validate_headers(rows: &[FieldRow]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, row) in rows.iter().enumerate().filter(|(_, row)| row.enabled) {
        let position = index + 1;

        if row.key.is_empty() && !row.value.is_empty() {
            errors.push(ValidationError::new(format!(
                "Header {position} has a value but no key"
            )));
        }

        // Also rejects headers whose value is intentionally empty.
        if !row.key.is_empty() && row.value.is_empty() {
            errors.push(ValidationError::new(format!(
                "Header {position} ({}) has no key",
                row.key
            )));
        }

        if RESERVED_HEADERS.contains(&row.key.to_lowercase().as_str()) {
            errors.push(ValidationError::new(format!(
                "Header \"{}\" is reserved and cannot be modified",
                row.key
            )));
        }

        if !row.key.is_empty() {
            let matching = rows
                .iter()
                .filter(|other| other.is_enabled_named(&row.key))
                .count();
            if matching > 1 {
                errors.push(ValidationError::new(format!(
                    "Duplicate header key: {}",
                    row.key
                )));
            }
        }

        if !row.key.is_empty() && !is_valid_header_name(&row.key) {
            errors.push(ValidationError::new(format!(
                "Invalid header name format: {}",
                row.key
            )));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn messages(rows: &[FieldRow]) -> Vec<String> {
        validate_headers(rows)
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn test_value_without_key() {
        let errors = messages(&[FieldRow::new("", "x")]);
        assert_eq!(errors, vec!["Header 1 has a value but no key"]);
        assert_eq!(errors.iter().filter(|m| m.contains("no key")).count(), 1);
    }

    #[test]
    fn test_key_without_value() {
        let errors = messages(&[FieldRow::new("X-Custom-Header", "")]);
        assert_eq!(errors, vec!["Header 1 (X-Custom-Header) has no key"]);
    }

    #[test]
    fn test_reserved_headers_any_case() {
        for key in ["host", "HOST", "Host", "Content-Length", "origin", "Referer"] {
            let errors = messages(&[FieldRow::new(key, "x")]);
            assert_eq!(
                errors,
                vec![format!("Header \"{key}\" is reserved and cannot be modified")]
            );
        }
    }

    #[test]
    fn test_duplicates_reported_per_row() {
        let rows = [
            FieldRow::new("Accept", "text/html"),
            FieldRow::new("accept", "application/json"),
            FieldRow::new("X-Other", "1"),
        ];
        let errors = messages(&rows);
        assert_eq!(
            errors,
            vec!["Duplicate header key: Accept", "Duplicate header key: accept"]
        );
    }

    #[test]
    fn test_duplicates_fold_unicode_case() {
        let rows = [
            FieldRow::new("\u{212A}-A", "1"),
            FieldRow::new("k-a", "2"),
        ];
        assert_eq!(
            messages(&rows),
            vec![
                "Duplicate header key: \u{212A}-A",
                "Invalid header name format: \u{212A}-A",
                "Duplicate header key: k-a",
            ]
        );
    }

    #[test]
    fn test_three_duplicates_yield_three_errors() {
        let rows = [
            FieldRow::new("X-A", "1"),
            FieldRow::new("x-a", "2"),
            FieldRow::new("X-a", "3"),
        ];
        let duplicates = messages(&rows)
            .into_iter()
            .filter(|m| m.to_lowercase().contains("duplicate header key"))
            .count();
        assert_eq!(duplicates, 3);
    }

    #[test]
    fn test_disabled_duplicate_is_ignored() {
        let rows = [
            FieldRow::new("Accept", "text/html"),
            FieldRow::disabled("Accept", "application/json"),
        ];
        assert!(validate_headers(&rows).is_empty());
    }

    #[test]
    fn test_header_name_grammar() {
        let errors = messages(&[FieldRow::new("X Invalid!! ", "v")]);
        assert_eq!(errors, vec!["Invalid header name format: X Invalid!! "]);
        assert!(messages(&[FieldRow::new("X-Custom_1", "v")]).is_empty());
        assert!(is_valid_header_name("!#$%&'*+-.^_`|~"));
        assert!(!is_valid_header_name("X:Colon"));
        assert!(!is_valid_header_name("X,Comma"));
    }

    #[test]
    fn test_disabled_and_blank_rows_skipped() {
        let rows = [
            FieldRow::disabled("", "orphan"),
            FieldRow::disabled("Host", "example.com"),
            FieldRow::empty(),
        ];
        assert!(validate_headers(&rows).is_empty());
    }

    #[test]
    fn test_all_violations_collected_in_row_order() {
        let rows = [
            FieldRow::new("Host", ""),
            FieldRow::new("", "value"),
            FieldRow::new("Bad Name", "v"),
        ];
        let errors = messages(&rows);
        assert_eq!(
            errors,
            vec![
                "Header 1 (Host) has no key",
                "Header \"Host\" is reserved and cannot be modified",
                "Header 2 has a value but no key",
                "Invalid header name format: Bad Name",
            ]
        );
    }
}
