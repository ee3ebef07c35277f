//! Form field component.
//!
//! Labeled text input with an optional validation message underneath.

use iced::widget::{column, container, text, text_input};
use iced::{Element, Length};

use crate::theme::{SPACING_XS, text_danger, text_input_default, text_input_error, text_muted};

/// Content of a form field's text control.
#[derive(Debug, Clone, Default)]
pub struct FieldInput {
    pub value: String,
    pub placeholder: String,
    /// Taller control for free text.
    pub multiline: bool,
}

// =============================================================================
// FORM FIELD
// =============================================================================

/// Creates a form field with label and optional error message.
///
/// # Arguments
///
/// * `label` - Field label text
/// * `input` - Current value and placeholder of the control
/// * `on_change` - Message factory for value changes
/// * `on_submit` - Message sent when Enter is pressed in the control
/// * `error` - Optional error message to display
///
/// # Example
///
/// ```rust,ignore
/// use contact_gui::component::{FieldInput, form_field};
///
/// let field = form_field(
///     "First Name*".to_string(),
///     &FieldInput { value: "Edd".into(), ..Default::default() },
///     |value| Message::FieldChanged(Field::FirstName, value),
///     Message::Submit,
///     Some("Error: firstName must have at least 5 characters".to_string()),
/// );
/// ```
pub fn form_field<'a, M: Clone + 'a>(
    label: String,
    input: &FieldInput,
    on_change: impl Fn(String) -> M + 'a,
    on_submit: M,
    error: Option<String>,
) -> Element<'a, M> {
    let label_text = text(label).size(13).style(text_muted);

    let padding = if input.multiline { 14.0 } else { 10.0 };
    let control = text_input(&input.placeholder, &input.value)
        .on_input(on_change)
        .on_submit(on_submit)
        .padding(padding)
        .width(Length::Fill)
        .style(if error.is_some() {
            text_input_error
        } else {
            text_input_default
        });

    let mut content = column![label_text, control].spacing(SPACING_XS);

    if let Some(err) = error {
        content = content.push(text(err).size(12).style(text_danger));
    }

    container(content)
        .padding([SPACING_XS, 0.0])
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Msg {
        Changed(String),
        Submit,
    }

    #[test]
    fn builds_with_and_without_error() {
        let _plain: Element<'_, Msg> = form_field(
            "Last Name*".to_string(),
            &FieldInput::default(),
            Msg::Changed,
            Msg::Submit,
            None,
        );
        let _failing: Element<'_, Msg> = form_field(
            "Email*".to_string(),
            &FieldInput {
                value: "user@user".to_string(),
                placeholder: "bluebill1049@hotmail.com".to_string(),
                multiline: false,
            },
            Msg::Changed,
            Msg::Submit,
            Some("email must be a valid email address".to_string()),
        );
    }
}
