use contact_model::{FIRST_NAME_MIN_CHARS, Field, is_valid_email};
use contact_view::{ERROR_TEST_ID, Harness, Screen};
use proptest::prelude::*;

fn first_name() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("a".to_string()), "[A-Za-z]{1,9}"]
}

fn last_name() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Za-z]{1,9}"]
}

fn email() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("user@user".to_string()),
        "[a-z]{1,6}@[a-z]{1,6}\\.(com|org|io)",
    ]
}

fn type_field(harness: &mut Harness, field: Field, text: &str) {
    let screen = harness.screen();
    let input = screen
        .document()
        .nodes()
        .into_iter()
        .find(|node| node.field() == Some(field))
        .unwrap();
    harness.type_text(input, text).unwrap();
}

fn rendered_errors(screen: &Screen) -> usize {
    screen.query_all_by_test_id(ERROR_TEST_ID).len()
}

proptest! {
    #[test]
    fn rendered_errors_match_failing_rules_after_submit(
        first in first_name(),
        last in last_name(),
        address in email(),
        message in "[ -~]{0,20}",
    ) {
        let mut harness = Harness::render();
        type_field(&mut harness, Field::FirstName, &first);
        type_field(&mut harness, Field::LastName, &last);
        type_field(&mut harness, Field::Email, &address);
        type_field(&mut harness, Field::Message, &message);

        let screen = harness.screen();
        let button = screen.get_by_text("Submit").unwrap();
        harness.click(button).unwrap();

        let failing = usize::from(first.chars().count() < FIRST_NAME_MIN_CHARS)
            + usize::from(last.is_empty())
            + usize::from(address.is_empty() || !is_valid_email(&address));
        let screen = harness.screen();
        prop_assert_eq!(rendered_errors(&screen), failing);
        prop_assert_eq!(
            screen.query_by_test_id("messageDisplay").unwrap().is_some(),
            failing == 0 && !message.is_empty()
        );
    }
}
