//! View layer.
//!
//! Walks a rendered [`Document`] and turns each node into Iced widgets.
//! Field groups become [`form_field`]s, the summary region becomes a
//! [`SummaryCard`], and the submit control becomes the primary button.

use contact_model::Field;
use contact_view::{Control, Document, ERROR_TEST_ID, Node, Tag};
use iced::widget::{Space, button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Alignment, Element, Font, Length, font};

use crate::component::{FieldInput, SummaryCard, form_field};
use crate::message::Message;
use crate::theme::{
    FORM_MAX_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, ThemeMode, button_primary,
    text_input_default, text_muted,
};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Whole window: theme picker header above the rendered form.
pub fn view_form<'a>(document: &Document, theme_mode: ThemeMode) -> Element<'a, Message> {
    let page = column![header(theme_mode), node_view(document.root())]
        .spacing(SPACING_LG)
        .max_width(FORM_MAX_WIDTH);

    scrollable(container(page).padding(SPACING_XL).center_x(Length::Fill)).into()
}

fn header<'a>(theme_mode: ThemeMode) -> Element<'a, Message> {
    row![
        Space::new().width(Length::Fill),
        text("Theme").size(13).style(text_muted),
        pick_list(
            &ThemeMode::ALL[..],
            Some(theme_mode),
            Message::ThemeModeSelected
        )
        .text_size(13),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

fn node_view<'a>(node: &Node) -> Element<'a, Message> {
    match node.tag {
        Tag::Form => column(node.children.iter().map(node_view))
            .spacing(SPACING_MD)
            .width(Length::Fill)
            .into(),
        Tag::Heading { level } => text(node.text_content())
            .size(heading_size(level))
            .font(BOLD)
            .into(),
        Tag::Group => match group_parts(node) {
            Some(parts) => {
                let field = parts.field;
                form_field(
                    parts.label,
                    &parts.input,
                    move |value| Message::FieldChanged(field, value),
                    Message::Submit,
                    parts.error,
                )
            }
            None => column(node.children.iter().map(node_view))
                .spacing(SPACING_SM)
                .into(),
        },
        Tag::Button => {
            let on_press = matches!(node.control, Some(Control::Submit)).then_some(Message::Submit);
            button(text(node.text_content()).size(14))
                .padding([SPACING_SM, SPACING_LG])
                .style(button_primary)
                .on_press_maybe(on_press)
                .into()
        }
        Tag::Section => summary_card(node).view(),
        Tag::Input | Tag::TextArea => match node.field() {
            Some(field) => text_input(
                node.placeholder.as_deref().unwrap_or_default(),
                node.value.as_deref().unwrap_or_default(),
            )
            .on_input(move |value| Message::FieldChanged(field, value))
            .padding(10.0)
            .style(text_input_default)
            .into(),
            None => Space::new().into(),
        },
        Tag::Label | Tag::Paragraph => text(node.text_content()).size(14).into(),
        Tag::Bold => text(node.text_content()).size(14).font(BOLD).into(),
    }
}

fn heading_size(level: u8) -> f32 {
    match level {
        1 => 28.0,
        2 => 20.0,
        _ => 16.0,
    }
}

/// Pieces of a field group needed to build a [`form_field`].
#[derive(Debug, Clone)]
struct GroupParts {
    field: Field,
    label: String,
    input: FieldInput,
    error: Option<String>,
}

fn group_parts(group: &Node) -> Option<GroupParts> {
    let control = group.children.iter().find(|child| child.field().is_some())?;
    let field = control.field()?;
    let label = group
        .children
        .iter()
        .find(|child| child.tag == Tag::Label)
        .map(Node::text_content)
        .unwrap_or_default();
    let error = group
        .children
        .iter()
        .find(|child| child.test_id.as_deref() == Some(ERROR_TEST_ID))
        .map(Node::text_content);

    Some(GroupParts {
        field,
        label,
        input: FieldInput {
            value: control.value.clone().unwrap_or_default(),
            placeholder: control.placeholder.clone().unwrap_or_default(),
            multiline: control.tag == Tag::TextArea,
        },
        error,
    })
}

fn summary_card(section: &Node) -> SummaryCard {
    let title = section
        .children
        .iter()
        .find(|child| matches!(child.tag, Tag::Heading { .. }))
        .map(Node::text_content)
        .unwrap_or_default();

    section
        .children
        .iter()
        .filter(|child| child.tag == Tag::Paragraph)
        .fold(SummaryCard::new(title), |card, entry| {
            let label: String = entry
                .children
                .iter()
                .filter(|child| child.tag == Tag::Bold)
                .map(Node::text_content)
                .collect();
            card.entry(label, entry.text.clone())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_model::FormModel;
    use contact_view::render;

    fn groups(document: &Document) -> Vec<GroupParts> {
        document
            .nodes()
            .into_iter()
            .filter(|node| node.tag == Tag::Group)
            .filter_map(group_parts)
            .collect()
    }

    #[test]
    fn every_field_gets_a_group() {
        let document = render(&FormModel::new());
        let parts = groups(&document);
        let fields: Vec<Field> = parts.iter().map(|p| p.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(parts[0].label, "First Name*");
        assert_eq!(parts[3].label, "Message");
        assert!(parts[3].input.multiline);
        assert!(!parts[2].input.multiline);
        assert_eq!(parts[2].input.placeholder, "bluebill1049@hotmail.com");
    }

    #[test]
    fn group_carries_error_text() {
        let mut form = FormModel::new();
        form.set_field(Field::FirstName, "Edd");
        let document = render(&form);
        let parts = groups(&document);
        assert_eq!(
            parts[0].error.as_deref(),
            Some("Error: firstName must have at least 5 characters")
        );
        assert_eq!(parts[0].input.value, "Edd");
        assert!(parts[1].error.is_none());
    }

    #[test]
    fn summary_section_becomes_card_entries() {
        let mut form = FormModel::new();
        form.set_field(Field::FirstName, "Blade");
        form.set_field(Field::LastName, "Runner");
        form.set_field(Field::Email, "blade@thomas.com");
        assert!(form.submit().is_accepted());

        let document = render(&form);
        let section = document
            .nodes()
            .into_iter()
            .find(|node| node.tag == Tag::Section)
            .unwrap();
        let card = summary_card(section);
        assert_eq!(card.len(), 3);
        let _element: Element<'_, Message> = card.view();
    }

    #[test]
    fn whole_view_builds_for_both_modes() {
        let document = render(&FormModel::new());
        let _light = view_form(&document, ThemeMode::Light);
        let _dark = view_form(&document, ThemeMode::Dark);
    }
}
