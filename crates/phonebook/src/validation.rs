//! Field validation rules.
//!
//! Validation is pure: it takes a candidate string and answers yes or no.
//! The prompt loop that re-asks on rejection lives in [`crate::console`].

use std::sync::OnceLock;

use regex::Regex;

use crate::contact::FieldKind;

/// A compiled validation rule for one field kind.
#[derive(Debug)]
pub struct FieldRule {
    /// Which field this rule applies to.
    pub kind: FieldKind,

    /// The compiled whole-string character-class pattern.
    regex: Regex,
}

impl FieldRule {
    /// Create a new rule for the given kind.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(kind: FieldKind, pattern: &str) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("Invalid regex pattern"),
        }
    }

    /// The shared rule for `kind`, compiled on first use.
    #[must_use]
    pub fn for_kind(kind: FieldKind) -> &'static Self {
        static NAME: OnceLock<FieldRule> = OnceLock::new();
        static NUMBER: OnceLock<FieldRule> = OnceLock::new();

        match kind {
            FieldKind::Name => NAME.get_or_init(|| Self::new(kind, r"^[A-Za-z ]+$")),
            FieldKind::Number => NUMBER.get_or_init(|| Self::new(kind, r"^[0-9-]+$")),
        }
    }

    /// Check a candidate value. Surrounding whitespace is ignored.
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        let text = text.trim();
        text.len() <= self.kind.max_len() && self.regex.is_match(text)
    }

    /// Diagnostic printed when this rule rejects a value.
    #[must_use]
    pub fn rejection_message(&self) -> &'static str {
        self.kind.rejection_message()
    }
}

/// Check whether `text` is an acceptable value for `kind`.
///
/// The text is trimmed first. Names accept ASCII letters and spaces, numbers
/// accept ASCII digits and hyphens; both require at least one character and
/// no more than [`FieldKind::max_len`].
#[must_use]
pub fn validate(kind: FieldKind, text: &str) -> bool {
    FieldRule::for_kind(kind).accepts(text)
}
