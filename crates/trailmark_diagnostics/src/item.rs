//! A single recorded observation.

use crate::level::DiagnosticLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One diagnostic observation: a level, an optional code, and a description.
///
/// Items are immutable once built. An empty code means "no code". In JSON
/// the fields appear as `Code`, `Description` and `Level`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiagnosticItem {
    #[serde(default)]
    code: String,
    description: String,
    #[serde(default)]
    level: DiagnosticLevel,
}

impl DiagnosticItem {
    /// Creates an item with an explicit level.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        level: DiagnosticLevel,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            level,
        }
    }

    /// Creates an error item.
    pub fn error(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, DiagnosticLevel::Error)
    }

    /// Creates a warning item.
    pub fn warning(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, DiagnosticLevel::Warning)
    }

    /// Creates an info item.
    pub fn info(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, DiagnosticLevel::Info)
    }

    /// Creates a trace item.
    pub fn trace(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, DiagnosticLevel::Trace)
    }

    /// The item's code, empty when none was given.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable message.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The item's level.
    pub fn level(&self) -> DiagnosticLevel {
        self.level
    }

    /// Returns `true` if a non-empty code is present.
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    /// Returns `true` if `other` is the same observation for deduplication
    /// purposes: case-insensitive code and description, identical level.
    pub fn matches(&self, other: &DiagnosticItem) -> bool {
        self.level == other.level
            && eq_ignore_case(&self.code, &other.code)
            && eq_ignore_case(&self.description, &other.description)
    }
}

impl fmt::Display for DiagnosticItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_code() {
            write!(f, "[{}] {}: {}", self.level, self.code, self.description)
        } else {
            write!(f, "[{}] {}", self.level, self.description)
        }
    }
}

/// Case-insensitive comparison under simple case folding, without allocating.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.chars().map(fold).eq(b.chars().map(fold))
}

/// Maps a char to one representative of its simple case-folding orbit.
///
/// Chars whose lowercase form is more than one char (e.g. `İ`) fold to
/// themselves, so `İ` never equals `i`.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    let lowered = match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    };
    match lowered {
        'ς' => 'σ',
        'ſ' => 's',
        'ϐ' => 'β',
        'ϑ' => 'θ',
        'ϕ' => 'φ',
        'ϖ' => 'π',
        'ϰ' => 'κ',
        'ϱ' => 'ρ',
        'ϵ' => 'ε',
        '\u{345}' | '\u{1fbe}' => 'ι',
        'ẛ' => 'ṡ',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_constructors_fix_level() {
        assert_eq!(DiagnosticItem::error("", "x").level(), DiagnosticLevel::Error);
        assert_eq!(
            DiagnosticItem::warning("", "x").level(),
            DiagnosticLevel::Warning
        );
        assert_eq!(DiagnosticItem::info("", "x").level(), DiagnosticLevel::Info);
        assert_eq!(DiagnosticItem::trace("", "x").level(), DiagnosticLevel::Trace);
    }

    #[test]
    fn display_without_code() {
        let item = DiagnosticItem::info("", "boot complete");
        assert_eq!(item.to_string(), "[Info] boot complete");
    }

    #[test]
    fn display_with_code() {
        let item = DiagnosticItem::warning("W1", "low disk");
        assert_eq!(item.to_string(), "[Warning] W1: low disk");
    }

    #[test]
    fn matches_ignores_case() {
        let a = DiagnosticItem::error("E100", "Disk Full");
        let b = DiagnosticItem::error("e100", "disk full");
        assert!(a.matches(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn matches_unicode_case() {
        let a = DiagnosticItem::info("", "ÜBER");
        let b = DiagnosticItem::info("", "über");
        assert!(a.matches(&b));
    }

    #[test]
    fn matches_final_and_medial_sigma() {
        let upper = DiagnosticItem::info("", "ΟΔΟΣ");
        assert!(upper.matches(&DiagnosticItem::info("", "οδος")));
        assert!(upper.matches(&DiagnosticItem::info("", "οδοσ")));
    }

    #[test]
    fn matches_long_s() {
        let long_s = DiagnosticItem::info("", "ſ");
        assert!(long_s.matches(&DiagnosticItem::info("", "S")));
        assert!(long_s.matches(&DiagnosticItem::info("", "s")));
    }

    #[test]
    fn matches_kelvin_sign_and_greek_symbols() {
        let kelvin = DiagnosticItem::info("", "\u{212a}");
        assert!(kelvin.matches(&DiagnosticItem::info("", "k")));
        assert!(DiagnosticItem::info("", "ϑ").matches(&DiagnosticItem::info("", "Θ")));
    }

    #[test]
    fn dotted_capital_i_is_not_folded_to_i() {
        let dotted = DiagnosticItem::info("", "İ");
        assert!(!dotted.matches(&DiagnosticItem::info("", "i")));
        assert!(dotted.matches(&DiagnosticItem::info("", "İ")));
    }

    #[test]
    fn level_is_compared_exactly() {
        let a = DiagnosticItem::info("", "same");
        let b = DiagnosticItem::warning("", "same");
        assert!(!a.matches(&b));
    }

    #[test]
    fn code_participates_in_match() {
        let a = DiagnosticItem::error("E1", "timeout");
        let b = DiagnosticItem::error("", "timeout");
        assert!(!a.matches(&b));
    }

    #[test]
    fn json_field_names() {
        let item = DiagnosticItem::error("E100", "timeout");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"Code":"E100","Description":"timeout","Level":"Error"}"#
        );
    }

    #[test]
    fn json_unknown_level_falls_back_to_info() {
        let item: DiagnosticItem =
            serde_json::from_str(r#"{"Code":"","Description":"x","Level":"Fatal"}"#).unwrap();
        assert_eq!(item.level(), DiagnosticLevel::Info);
    }

    #[test]
    fn json_missing_code_and_level() {
        let item: DiagnosticItem = serde_json::from_str(r#"{"Description":"x"}"#).unwrap();
        assert_eq!(item, DiagnosticItem::info("", "x"));
    }
}
