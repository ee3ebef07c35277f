//! Application messages.

use contact_model::Field;

use crate::theme::ThemeMode;

/// Every event the application reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    /// A text control changed; carries the full new value.
    FieldChanged(Field, String),
    /// Submit button pressed (or Enter in a text control).
    Submit,
    /// Theme picked in the header.
    ThemeModeSelected(ThemeMode),
}
