// ============================================================
// Layer 3 — Judgment Domain Type
// ============================================================
// The verdict an annotator gives on one (document, label) row.
//
// There are exactly three possible answers to the question
// "is the label provided for this document correct?":
//
//   Correct → the label fits the document
//   Wrong   → the label does not fit the document
//   Unsure  → the annotator cannot decide
//
// Each judgment has a single-key shortcut (c / w / u) and a
// fixed string form. The string form is what ends up in the
// `user_annotation` column of the exported spreadsheet, so it
// must never change.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One annotator verdict on a document/label pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Judgment {
    Correct,
    Wrong,
    Unsure,
}

impl Judgment {
    /// All judgments in the order the form presents them
    pub const ALL: [Judgment; 3] = [Judgment::Correct, Judgment::Wrong, Judgment::Unsure];

    /// The exact text written to the export column
    pub fn as_str(self) -> &'static str {
        match self {
            Judgment::Correct => "Correct",
            Judgment::Wrong   => "Wrong",
            Judgment::Unsure  => "Unsure",
        }
    }

    /// The single-key shortcut bound to this judgment
    pub fn shortcut(self) -> char {
        match self {
            Judgment::Correct => 'c',
            Judgment::Wrong   => 'w',
            Judgment::Unsure  => 'u',
        }
    }

    /// Resolve a shortcut key (case-insensitive) to a judgment
    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|j| j.shortcut() == key.to_ascii_lowercase())
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the full name ("correct", "Wrong") or the shortcut key.
impl FromStr for Judgment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(key), None) = (chars.next(), chars.next()) {
            if let Some(j) = Self::from_shortcut(key) {
                return Ok(j);
            }
        }
        Self::ALL
            .into_iter()
            .find(|j| j.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown judgment '{trimmed}' (expected c, w or u)"))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_strings_are_fixed() {
        assert_eq!(Judgment::Correct.to_string(), "Correct");
        assert_eq!(Judgment::Wrong.to_string(),   "Wrong");
        assert_eq!(Judgment::Unsure.to_string(),  "Unsure");
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(Judgment::from_shortcut('c'), Some(Judgment::Correct));
        assert_eq!(Judgment::from_shortcut('W'), Some(Judgment::Wrong));
        assert_eq!(Judgment::from_shortcut('u'), Some(Judgment::Unsure));
        assert_eq!(Judgment::from_shortcut('x'), None);
    }

    #[test]
    fn test_parse_name_or_key() {
        assert_eq!("wrong".parse::<Judgment>(), Ok(Judgment::Wrong));
        assert_eq!(" u ".parse::<Judgment>(),   Ok(Judgment::Unsure));
        assert!("maybe".parse::<Judgment>().is_err());
    }
}
