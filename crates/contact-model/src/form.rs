//! The contact form state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::field::{Field, FormValues};
use crate::privacy::redact_value;
use crate::validation::{FieldErrors, ValidationError, validate, validate_field};

/// Snapshot of the values accepted by the last successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` when the message was left empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmittedValues {
    fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            message: (!values.message.is_empty()).then(|| values.message.clone()),
        }
    }

    /// Submitted value for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Message => self.message.as_deref(),
        }
    }
}

/// Result of [`FormModel::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome<'a> {
    Accepted(&'a SubmittedValues),
    Rejected(&'a FieldErrors),
}

impl SubmitOutcome<'_> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Contact form state: values, derived errors, and the last accepted
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    values: FormValues,
    errors: FieldErrors,
    submitted: Option<SubmittedValues>,
}

impl FormModel {
    /// An empty form: no values, no errors, nothing submitted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field and re-run its rule.
    ///
    /// Fields that were never touched keep no error until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(field = %field, value = redact_value(&value), "field updated");
        if field.is_validated() {
            let outcome = validate_field(field, &value);
            if let Some(error) = &outcome {
                debug!(field = %field, rule = error.kind(), "field failed validation");
            }
            self.errors.set(field, outcome);
        }
        self.values.set(field, value);
    }

    /// [`Self::set_field`] for hosts that address fields by key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FormError::UnknownField`] if `name` is not a field key.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validate every field and publish the values if nothing failed.
    ///
    /// A rejected submit leaves the previous submission in place. Input
    /// values are never cleared.
    pub fn submit(&mut self) -> SubmitOutcome<'_> {
        self.errors = validate(&self.values);
        if self.errors.is_empty() {
            info!("contact form submitted");
            let submitted = self
                .submitted
                .insert(SubmittedValues::from_values(&self.values));
            SubmitOutcome::Accepted(submitted)
        } else {
            warn!(errors = self.errors.len(), "contact form submission rejected");
            SubmitOutcome::Rejected(&self.errors)
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn submitted(&self) -> Option<&SubmittedValues> {
        self.submitted.as_ref()
    }

    /// True when no rule currently fails.
    ///
    /// Untouched fields are not validated until submit, so this reflects the
    /// error mapping rather than a fresh validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
