//! Output of the CLI commands for representative inputs.

use contact_cli::cli::SubmitArgs;
use contact_cli::commands::{SubmitReport, run_submit};
use contact_cli::summary::{error_list, errors_json, fields_table, submission_json, submission_table};

fn submit(first: &str, last: &str, email: &str, message: &str) -> SubmitReport {
    run_submit(&SubmitArgs {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        json: false,
    })
}

#[test]
fn empty_submit_lists_three_errors() {
    let SubmitReport::Rejected(errors) = submit("", "", "", "") else {
        panic!("expected rejection");
    };
    insta::assert_snapshot!(error_list(&errors), @r"
    Errors:
    - Error: firstName must have at least 5 characters
    - lastName is a required field
    - email is a required field
    ");
}

#[test]
fn invalid_email_is_the_only_error() {
    let SubmitReport::Rejected(errors) = submit("Blade", "Thomas", "user@user", "") else {
        panic!("expected rejection");
    };
    insta::assert_snapshot!(error_list(&errors), @r"
    Errors:
    - email must be a valid email address
    ");
}

#[test]
fn rejected_submit_as_json() {
    let SubmitReport::Rejected(errors) = submit("Blade", "", "blade@thomas.com", "") else {
        panic!("expected rejection");
    };
    insta::assert_snapshot!(errors_json(&errors).unwrap(), @r#"
    {
      "errors": {
        "lastName": "lastName is a required field"
      }
    }
    "#);
}

#[test]
fn accepted_submit_as_json_omits_empty_message() {
    let SubmitReport::Accepted(submitted) = submit("Blade", "Thomas", "blade@thomas.com", "")
    else {
        panic!("expected acceptance");
    };
    insta::assert_snapshot!(submission_json(&submitted).unwrap(), @r#"
    {
      "firstName": "Blade",
      "lastName": "Thomas",
      "email": "blade@thomas.com"
    }
    "#);
}

#[test]
fn accepted_submit_as_json_with_message() {
    let SubmitReport::Accepted(submitted) =
        submit("Blade", "Thomas", "blade@thomas.com", "Hello world")
    else {
        panic!("expected acceptance");
    };
    insta::assert_snapshot!(submission_json(&submitted).unwrap(), @r#"
    {
      "firstName": "Blade",
      "lastName": "Thomas",
      "email": "blade@thomas.com",
      "message": "Hello world"
    }
    "#);
}

#[test]
fn submission_table_lists_submitted_values() {
    let SubmitReport::Accepted(submitted) = submit("Blade", "Thomas", "blade@thomas.com", "")
    else {
        panic!("expected acceptance");
    };
    let mut table = submission_table(&submitted);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("First Name"));
    assert!(rendered.contains("blade@thomas.com"));
    assert!(!rendered.contains("Message"));
}

#[test]
fn fields_table_describes_every_rule() {
    let mut table = fields_table();
    table.force_no_tty();
    let rendered = table.to_string();
    for needle in [
        "firstName",
        "lastName",
        "email",
        "message",
        "at least 5 characters",
        "required, valid email address",
    ] {
        assert!(rendered.contains(needle), "missing {needle} in\n{rendered}");
    }
}
