//! Submission summary card.

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Font, Length, font};

use crate::theme::{SPACING_LG, SPACING_SM, SPACING_XS, container_card};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// A titled card listing `label: value` entries.
///
/// ```rust,ignore
/// SummaryCard::new("You Submitted:")
///     .entry("First Name: ", "Blade")
///     .view()
/// ```
pub struct SummaryCard {
    title: String,
    entries: Vec<(String, String)>,
}

impl SummaryCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Add a row; `label` is shown in bold before `value`.
    #[must_use]
    pub fn entry(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((label.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the element.
    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let rows = self.entries.into_iter().map(|(label, value)| -> Element<'a, M> {
            row![text(label).size(14).font(BOLD), text(value).size(14)]
                .spacing(SPACING_XS)
                .into()
        });

        container(
            column![
                text(self.title).size(18).font(BOLD),
                Space::new().height(SPACING_SM),
                column(rows).spacing(SPACING_XS),
            ]
            .width(Length::Fill),
        )
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(container_card)
        .into()
    }
}
