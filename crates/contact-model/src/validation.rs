//! Field validation rules.
//!
//! Every rule is a pure function of a single field value. The form model
//! calls [`validate_field`] for the field that just changed and
//! [`validate`] for all fields before a submit.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::field::{Field, FormValues};

/// Minimum number of characters accepted for the first name.
pub const FIRST_NAME_MIN_CHARS: usize = 5;

/// Email shape: a dotted local part (or a quoted one) followed by `@` and
/// either a bracketed IPv4 literal or a dotted domain with an alphabetic
/// extension of at least two letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("Invalid email regex")
});

/// A failed validation rule. The display text is what the form renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty but a value is mandatory.
    #[error("{field} is a required field")]
    Required { field: Field },

    /// Value is shorter than the rule's minimum, counted in characters.
    #[error("Error: {field} must have at least {min} characters")]
    TooShort { field: Field, min: usize },

    /// Value is present but does not have the expected shape.
    #[error("{field} must be a valid {expected}")]
    InvalidFormat {
        field: Field,
        expected: &'static str,
    },
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::InvalidFormat { field, .. } => *field,
        }
    }

    /// Short rule name, used in logs and CLI tables.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::TooShort { .. } => "too_short",
            Self::InvalidFormat { .. } => "invalid_format",
        }
    }
}

/// Returns true if `value` has the shape of an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Run the rule attached to `field` against `value`.
///
/// Returns `None` when the value passes or the field has no rule.
pub fn validate_field(field: Field, value: &str) -> Option<ValidationError> {
    match field {
        Field::FirstName => (value.chars().count() < FIRST_NAME_MIN_CHARS).then_some(
            ValidationError::TooShort {
                field,
                min: FIRST_NAME_MIN_CHARS,
            },
        ),
        Field::LastName => value
            .is_empty()
            .then_some(ValidationError::Required { field }),
        Field::Email => {
            if value.is_empty() {
                Some(ValidationError::Required { field })
            } else if !is_valid_email(value) {
                Some(ValidationError::InvalidFormat {
                    field,
                    expected: "email address",
                })
            } else {
                None
            }
        }
        Field::Message => None,
    }
}

/// Validate every field of `values`.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::VALIDATED {
        errors.set(field, validate_field(field, values.get(field)));
    }
    errors
}

/// Current validation failures keyed by field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.entries.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, ValidationError> {
        self.entries.iter()
    }

    /// Rendered error messages in form order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.values().map(ToString::to_string).collect()
    }

    /// Record the outcome of one rule, clearing the entry when it passed.
    pub(crate) fn set(&mut self, field: Field, outcome: Option<ValidationError>) {
        match outcome {
            Some(error) => {
                self.entries.insert(field, error);
            }
            None => {
                self.entries.remove(&field);
            }
        }
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a Field, &'a ValidationError);
    type IntoIter = btree_map::Iter<'a, Field, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_needs_five_characters() {
        let error = validate_field(Field::FirstName, "a").unwrap();
        assert_eq!(
            error.to_string(),
            "Error: firstName must have at least 5 characters"
        );
        assert!(validate_field(Field::FirstName, "").is_some());
        assert!(validate_field(Field::FirstName, "Bladi").is_none());
    }

    #[test]
    fn first_name_length_counts_characters_not_bytes() {
        // Four characters, eight bytes.
        assert!(validate_field(Field::FirstName, "Zoë😀").is_some());
        assert!(validate_field(Field::FirstName, "Zoëlé").is_none());
    }

    #[test]
    fn last_name_is_required() {
        let error = validate_field(Field::LastName, "").unwrap();
        assert_eq!(error.to_string(), "lastName is a required field");
        assert_eq!(error.kind(), "required");
        assert!(validate_field(Field::LastName, "T").is_none());
    }

    #[test]
    fn email_required_before_format() {
        let empty = validate_field(Field::Email, "").unwrap();
        assert_eq!(empty, ValidationError::Required { field: Field::Email });
        assert_eq!(empty.to_string(), "email is a required field");

        let malformed = validate_field(Field::Email, "user@user").unwrap();
        assert_eq!(malformed.to_string(), "email must be a valid email address");
        assert_eq!(malformed.field(), Field::Email);
    }

    #[test]
    fn email_shapes() {
        for valid in [
            "blade@thomas.com",
            "first.last@sub.example.org",
            "a+tag@example.io",
            "\"quoted name\"@example.com",
            "user@[192.168.0.1]",
        ] {
            assert!(is_valid_email(valid), "expected valid: {valid}");
        }
        for invalid in [
            "user@user",
            "user",
            "@example.com",
            "user@.com",
            "user@example.c",
            "us er@example.com",
            "user@@example.com",
            ".user@example.com",
        ] {
            assert!(!is_valid_email(invalid), "expected invalid: {invalid}");
        }
    }

    #[test]
    fn message_accepts_anything() {
        assert!(validate_field(Field::Message, "").is_none());
        assert!(validate_field(Field::Message, &"x".repeat(10_000)).is_none());
    }

    #[test]
    fn validate_reports_in_form_order() {
        let errors = validate(&FormValues::default());
        assert_eq!(errors.len(), 3);
        let fields: Vec<Field> = errors.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, vec![Field::FirstName, Field::LastName, Field::Email]);
        assert_eq!(
            errors.messages(),
            vec![
                "Error: firstName must have at least 5 characters",
                "lastName is a required field",
                "email is a required field",
            ]
        );
    }
}
