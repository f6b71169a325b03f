use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// How text is lowercased for case-insensitive matching.
///
/// `Ascii` only folds `A-Z`; `Unicode` lowercases every character on its own.
/// Both fold one character at a time, so an exact substring still matches
/// after folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFolding {
    /// Fold the ASCII range only; every other character compares exactly.
    Ascii,
    /// Per-character Unicode lowercasing (`char::to_lowercase`).
    #[default]
    Unicode,
}

impl CaseFolding {
    /// Lowercases `text` according to this folding.
    pub fn fold<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Ascii if text.bytes().any(|b| b.is_ascii_uppercase()) => {
                Cow::Owned(text.to_ascii_lowercase())
            }
            Self::Ascii => Cow::Borrowed(text),
            // Per character: `str::to_lowercase` turns word-final Σ into ς.
            Self::Unicode => Cow::Owned(text.chars().flat_map(char::to_lowercase).collect()),
        }
    }
}

impl fmt::Display for CaseFolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Unicode => write!(f, "unicode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding_serializes_to_json_correctly() {
        assert_eq!(
            serde_json::to_string(&CaseFolding::Ascii).unwrap(),
            r#""ascii""#
        );
        assert_eq!(
            serde_json::to_string(&CaseFolding::Unicode).unwrap(),
            r#""unicode""#
        );

        let parsed: CaseFolding = serde_json::from_str(r#""ascii""#).unwrap();
        assert_eq!(parsed, CaseFolding::Ascii);
    }

    #[test]
    fn test_case_folding_deserialization_fails_on_unknown_variant() {
        let result: Result<CaseFolding, _> = serde_json::from_str(r#""turkish""#);

        assert!(result.is_err());
    }

    #[test]
    fn test_case_folding_display() {
        assert_eq!(format!("{}", CaseFolding::Ascii), "ascii");
        assert_eq!(format!("{}", CaseFolding::Unicode), "unicode");
    }

    #[test]
    fn test_default_is_unicode() {
        assert_eq!(CaseFolding::default(), CaseFolding::Unicode);
    }

    #[test]
    fn test_ascii_folding_leaves_non_ascii_untouched() {
        assert_eq!(CaseFolding::Ascii.fold("ÉCOLE Rust"), "École rust");
        assert_eq!(CaseFolding::Unicode.fold("ÉCOLE Rust"), "école rust");
    }

    #[test]
    fn test_ascii_folding_borrows_when_nothing_changes() {
        assert!(matches!(CaseFolding::Ascii.fold("already lower"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unicode_folding_ignores_word_position() {
        // Capital sigma folds to the same letter mid-word and word-final.
        assert_eq!(CaseFolding::Unicode.fold("ΟΔΟΣ"), "οδοσ");
        assert_eq!(CaseFolding::Unicode.fold("Σ"), "σ");
    }
}
