use anyhow::{Context, Result};
use contact_model::{Field, FieldErrors, FormModel, SubmitOutcome, SubmittedValues, ValidationError};
use tracing::{debug, info_span};

use crate::cli::{CheckArgs, SubmitArgs};

/// What a `submit` run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    Accepted(SubmittedValues),
    Rejected(FieldErrors),
}

impl SubmitReport {
    pub fn has_errors(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Fill a fresh form with the arguments and submit it.
pub fn run_submit(args: &SubmitArgs) -> SubmitReport {
    let span = info_span!("submit");
    let _guard = span.enter();

    let mut form = FormModel::new();
    let inputs = [
        (Field::FirstName, &args.first_name),
        (Field::LastName, &args.last_name),
        (Field::Email, &args.email),
        (Field::Message, &args.message),
    ];
    for (field, value) in inputs {
        if !value.is_empty() {
            form.set_field(field, value.as_str());
        }
    }

    match form.submit() {
        SubmitOutcome::Accepted(submitted) => SubmitReport::Accepted(submitted.clone()),
        SubmitOutcome::Rejected(errors) => SubmitReport::Rejected(errors.clone()),
    }
}

/// Run the live rule for one field, addressed by key.
///
/// Returns the failing rule, or `None` when the value passes.
pub fn run_check(args: &CheckArgs) -> Result<Option<ValidationError>> {
    let mut form = FormModel::new();
    form.set_field_by_name(&args.field, args.value.as_str())
        .with_context(|| format!("check {}", args.field))?;
    let error = form.errors().iter().next().map(|(_, error)| error.clone());
    debug!(
        field = %args.field,
        rule = error.as_ref().map_or("ok", ValidationError::kind),
        "field checked"
    );
    Ok(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit_args(first: &str, last: &str, email: &str, message: &str) -> SubmitArgs {
        SubmitArgs {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            json: false,
        }
    }

    fn check_args(field: &str, value: &str) -> CheckArgs {
        CheckArgs {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn empty_submit_is_rejected_with_three_errors() {
        let report = run_submit(&submit_args("", "", "", ""));
        let SubmitReport::Rejected(errors) = report else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn valid_submit_is_accepted() {
        let report = run_submit(&submit_args("Blade", "Thomas", "blade@thomas.com", ""));
        assert!(!report.has_errors());
        let SubmitReport::Accepted(submitted) = report else {
            panic!("expected acceptance");
        };
        assert_eq!(submitted.email, "blade@thomas.com");
        assert!(submitted.message.is_none());
    }

    #[test]
    fn check_reports_short_first_name() {
        let error = run_check(&check_args("first-name", "Edd")).unwrap();
        assert!(matches!(
            error,
            Some(ValidationError::TooShort {
                field: Field::FirstName,
                min: 5
            })
        ));
    }

    #[test]
    fn check_passes_any_message() {
        assert_eq!(run_check(&check_args("message", "")).unwrap(), None);
    }

    #[test]
    fn check_rejects_unknown_field() {
        let error = run_check(&check_args("phone", "555")).unwrap_err();
        assert!(format!("{error:#}").contains("unknown form field: phone"));
    }
}
