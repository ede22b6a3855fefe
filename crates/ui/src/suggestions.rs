//! Common header presets offered next to the header editor.

use courier_domain::request::FieldRow;

/// A header the user can insert with one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSuggestion {
    /// Header name.
    pub key: &'static str,
    /// Header value.
    pub value: &'static str,
}

impl HeaderSuggestion {
    /// Creates an enabled row holding this header.
    #[must_use]
    pub fn to_row(self) -> FieldRow {
        FieldRow::new(self.key, self.value)
    }

    /// Label shown in the suggestion list.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}: {}", self.key, self.value)
    }
}

/// Presets in display order.
pub const HEADER_SUGGESTIONS: &[HeaderSuggestion] = &[
    HeaderSuggestion {
        key: "Accept",
        value: "application/json",
    },
    HeaderSuggestion {
        key: "Accept",
        value: "application/xml",
    },
    HeaderSuggestion {
        key: "Accept-Language",
        value: "en-US",
    },
    HeaderSuggestion {
        key: "Cache-Control",
        value: "no-cache",
    },
    HeaderSuggestion {
        key: "Content-Type",
        value: "application/json",
    },
    HeaderSuggestion {
        key: "User-Agent",
        value: "Courier/1.0",
    },
    HeaderSuggestion {
        key: "X-Requested-With",
        value: "XMLHttpRequest",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use courier_application::builder::is_valid_header_name;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_suggestions_are_valid_headers() {
        for suggestion in HEADER_SUGGESTIONS {
            assert!(is_valid_header_name(suggestion.key), "{}", suggestion.key);
        }
    }

    #[test]
    fn test_suggestion_row() {
        let row = HEADER_SUGGESTIONS[0].to_row();
        assert_eq!(row.key, "Accept");
        assert_eq!(row.value, "application/json");
        assert!(row.enabled);
        assert_eq!(HEADER_SUGGESTIONS[0].label(), "Accept: application/json");
    }
}
