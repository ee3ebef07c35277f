//! Projection of a [`FormModel`] into a [`Document`].

use contact_model::{Field, FormModel, SubmittedValues};

use crate::node::{Control, Document, Node, Role, Tag};

/// Text of the form heading.
pub const FORM_HEADING: &str = "Contact Form";

/// Text of the submit button.
pub const SUBMIT_LABEL: &str = "Submit";

/// Heading of the submission summary.
pub const SUMMARY_HEADING: &str = "You Submitted:";

/// Accessible name of the submission summary region.
pub const SUMMARY_LABEL: &str = "Submission summary";

/// Test id carried by every rendered error message.
pub const ERROR_TEST_ID: &str = "error";

/// Test id of the summary entry for `field`.
pub fn display_test_id(field: Field) -> &'static str {
    match field {
        Field::FirstName => "firstnameDisplay",
        Field::LastName => "lastnameDisplay",
        Field::Email => "emailDisplay",
        Field::Message => "messageDisplay",
    }
}

/// Label text for `field`; required fields are marked with `*`.
pub fn label_text(field: Field) -> String {
    if field.is_required() {
        format!("{}*", field.label())
    } else {
        field.label().to_string()
    }
}

/// Render the current state of `form`.
pub fn render(form: &FormModel) -> Document {
    let mut root = Node::new(Tag::Form)
        .role(Role::Form)
        .aria_label("Contact form")
        .child(
            Node::new(Tag::Heading { level: 1 })
                .role(Role::Heading)
                .text(FORM_HEADING),
        )
        .children(Field::ALL.into_iter().map(|field| field_group(form, field)))
        .child(
            Node::new(Tag::Button)
                .role(Role::Button)
                .control(Control::Submit)
                .text(SUBMIT_LABEL),
        );

    if let Some(submitted) = form.submitted() {
        root = root.child(summary(submitted));
    }

    Document::new(root)
}

fn field_group(form: &FormModel, field: Field) -> Node {
    let tag = if field == Field::Message {
        Tag::TextArea
    } else {
        Tag::Input
    };
    let mut group = Node::new(Tag::Group)
        .child(Node::new(Tag::Label).label_for(field).text(label_text(field)))
        .child(
            Node::new(tag)
                .role(Role::Textbox)
                .control(Control::Input(field))
                .value(form.value(field))
                .placeholder(field.placeholder()),
        );
    if let Some(error) = form.error(field) {
        group = group.child(
            Node::new(Tag::Paragraph)
                .test_id(ERROR_TEST_ID)
                .text(error.to_string()),
        );
    }
    group
}

fn summary(submitted: &SubmittedValues) -> Node {
    let entries = Field::ALL.into_iter().filter_map(|field| {
        submitted.get(field).map(|value| {
            Node::new(Tag::Paragraph)
                .test_id(display_test_id(field))
                .child(Node::new(Tag::Bold).text(format!("{}: ", field.label())))
                .text(value)
        })
    });
    Node::new(Tag::Section)
        .role(Role::Region)
        .aria_label(SUMMARY_LABEL)
        .child(Node::new(Tag::Heading { level: 2 }).text(SUMMARY_HEADING))
        .children(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_test_ids(document: &Document, id: &str) -> usize {
        document
            .nodes()
            .iter()
            .filter(|node| node.test_id.as_deref() == Some(id))
            .count()
    }

    #[test]
    fn fresh_form_has_heading_inputs_and_button_only() {
        let document = render(&FormModel::new());
        let nodes = document.nodes();
        assert_eq!(
            nodes.iter().filter(|n| n.role == Some(Role::Textbox)).count(),
            4
        );
        assert_eq!(
            nodes.iter().filter(|n| n.role == Some(Role::Button)).count(),
            1
        );
        assert_eq!(count_test_ids(&document, ERROR_TEST_ID), 0);
        assert!(nodes.iter().all(|n| n.role != Some(Role::Region)));
    }

    #[test]
    fn labels_mark_required_fields() {
        assert_eq!(label_text(Field::FirstName), "First Name*");
        assert_eq!(label_text(Field::Email), "Email*");
        assert_eq!(label_text(Field::Message), "Message");
    }

    #[test]
    fn inputs_echo_current_values() {
        let mut form = FormModel::new();
        form.set_field(Field::Email, "blade@");
        let document = render(&form);
        let email = document
            .nodes()
            .into_iter()
            .find(|node| node.field() == Some(Field::Email))
            .unwrap();
        assert_eq!(email.value.as_deref(), Some("blade@"));
    }

    #[test]
    fn summary_omits_empty_message() {
        let mut form = FormModel::new();
        form.set_field(Field::FirstName, "Blade");
        form.set_field(Field::LastName, "Thomas");
        form.set_field(Field::Email, "blade@thomas.com");
        form.submit();

        let document = render(&form);
        assert_eq!(count_test_ids(&document, "firstnameDisplay"), 1);
        assert_eq!(count_test_ids(&document, "messageDisplay"), 0);
    }
}
