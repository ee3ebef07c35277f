//! Form fields and their current values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// One input of the contact form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// Fields that carry a validation rule.
    pub const VALIDATED: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    /// Field key as used in error messages and serialized output.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Example value shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Edd",
            Self::LastName => "Burke",
            Self::Email => "bluebill1049@hotmail.com",
            Self::Message => "",
        }
    }

    /// Whether a non-empty value is mandatory.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }

    /// Whether the field has a validation rule at all.
    pub fn is_validated(self) -> bool {
        Self::VALIDATED.contains(&self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = FormError;

    /// Accepts the camelCase key as well as kebab-case and snake_case
    /// spellings, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}

/// Current values of all four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_spellings() {
        assert_eq!("firstName".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!("first-name".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!("LAST_NAME".parse::<Field>().unwrap(), Field::LastName);
        assert_eq!(" Email ".parse::<Field>().unwrap(), Field::Email);
        assert_eq!(
            "phone".parse::<Field>().unwrap_err(),
            FormError::UnknownField("phone".to_string())
        );
    }

    #[test]
    fn only_message_is_optional() {
        let optional: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| !field.is_required())
            .collect();
        assert_eq!(optional, vec![Field::Message]);
        assert!(!Field::Message.is_validated());
    }

    #[test]
    fn values_round_trip_by_field() {
        let mut values = FormValues::default();
        for field in Field::ALL {
            values.set(field, field.label());
        }
        for field in Field::ALL {
            assert_eq!(values.get(field), field.label());
        }
    }
}
