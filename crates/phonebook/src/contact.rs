//! Core contact types for phonebook.
//!
//! This module defines the record that the store persists: a name and a
//! phone number, serialized as one comma-delimited line.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation;

/// Separator between the name and number in a stored record.
pub const RECORD_SEPARATOR: char = ',';

/// The two kinds of field a contact is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Alphabetic characters and spaces.
    Name,
    /// Digits and hyphens.
    Number,
}

impl FieldKind {
    /// Maximum accepted length of a trimmed value.
    #[must_use]
    pub fn max_len(self) -> usize {
        match self {
            Self::Name => 60,
            Self::Number => 25,
        }
    }

    /// Diagnostic printed when a value of this kind is rejected.
    #[must_use]
    pub fn rejection_message(self) -> &'static str {
        match self {
            Self::Name => {
                "Invalid name. Please use alphabetical characters only. \
                 Ensure it does not exceed 60 characters."
            }
            Self::Number => {
                "Invalid number. Please use numeric characters and dashes only. \
                 Ensure it does not exceed 25 characters."
            }
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Number => write!(f, "phone number"),
        }
    }
}

/// A single phone book entry.
///
/// Contacts are built from validated input, appended to the store and then
/// dropped. Duplicates are allowed; the pair itself is the only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Letters and spaces, 1 to 60 characters.
    pub name: String,
    /// Digits and hyphens, 1 to 25 characters.
    pub number: String,
}

impl Contact {
    /// Build a contact from raw input, trimming and validating both fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] for the first field that fails validation.
    pub fn new(name: &str, number: &str) -> Result<Self> {
        let name = name.trim();
        if !validation::validate(FieldKind::Name, name) {
            return Err(Error::invalid_field(FieldKind::Name, name));
        }

        let number = number.trim();
        if !validation::validate(FieldKind::Number, number) {
            return Err(Error::invalid_field(FieldKind::Number, number));
        }

        Ok(Self {
            name: name.to_string(),
            number: number.to_string(),
        })
    }

    /// Serialize as a store line without the terminator.
    ///
    /// Embedded separators are not escaped; validation keeps them out.
    #[must_use]
    pub fn to_record(&self) -> String {
        format!("{}{RECORD_SEPARATOR}{}", self.name, self.number)
    }

    /// Parse a raw store line, splitting at the first separator.
    ///
    /// Returns `None` for lines without a separator.
    #[must_use]
    pub fn from_record(line: &str) -> Option<Self> {
        let (name, number) = line.split_once(RECORD_SEPARATOR)?;
        Some(Self {
            name: name.to_string(),
            number: number.to_string(),
        })
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_max_len() {
        assert_eq!(FieldKind::Name.max_len(), 60);
        assert_eq!(FieldKind::Number.max_len(), 25);
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Name.to_string(), "name");
        assert_eq!(FieldKind::Number.to_string(), "phone number");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            FieldKind::Name.rejection_message(),
            "Invalid name. Please use alphabetical characters only. Ensure it does not exceed 60 characters."
        );
        assert_eq!(
            FieldKind::Number.rejection_message(),
            "Invalid number. Please use numeric characters and dashes only. Ensure it does not exceed 25 characters."
        );
    }

    #[test]
    fn test_new_trims_fields() {
        let contact = Contact::new("  Jane Doe ", " 555-1234\t").unwrap();
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.number, "555-1234");
    }

    #[test]
    fn test_new_rejects_bad_name_first() {
        let err = Contact::new("J4ne", "nope").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField {
                kind: FieldKind::Name,
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_bad_number() {
        let err = Contact::new("Jane", "555 1234").unwrap_err();
        match err {
            Error::InvalidField { kind, value } => {
                assert_eq!(kind, FieldKind::Number);
                assert_eq!(value, "555 1234");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_to_record() {
        let contact = Contact::new("Jane Doe", "555-1234").unwrap();
        assert_eq!(contact.to_record(), "Jane Doe,555-1234");
        assert_eq!(contact.to_string(), "Jane Doe,555-1234");
    }

    #[test]
    fn test_from_record() {
        let contact = Contact::from_record("Al Smith,123-4567").unwrap();
        assert_eq!(contact.name, "Al Smith");
        assert_eq!(contact.number, "123-4567");
    }

    #[test]
    fn test_from_record_splits_at_first_separator() {
        let contact = Contact::from_record("a,b,c").unwrap();
        assert_eq!(contact.name, "a");
        assert_eq!(contact.number, "b,c");
    }

    #[test]
    fn test_from_record_without_separator() {
        assert!(Contact::from_record("just a name").is_none());
    }

    #[test]
    fn test_contact_serialize() {
        let contact = Contact::new("Bob Jones", "987-6543").unwrap();
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(json, r#"{"name":"Bob Jones","number":"987-6543"}"#);
    }
}
