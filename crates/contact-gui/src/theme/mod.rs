//! Theme module for the contact form.
//!
//! - Light and dark palettes (`palette`)
//! - Spacing constants (`spacing`)
//! - Widget style functions (`styles`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use contact_gui::theme::{button_primary, form_theme, ThemeMode, SPACING_MD};
//!
//! let theme = form_theme(ThemeMode::Dark);
//! button(text("Submit")).style(button_primary).padding(SPACING_MD);
//! ```

pub mod palette;
pub mod spacing;
pub mod styles;

pub use palette::{ThemeMode, form_palette};
pub use spacing::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN, FORM_MAX_WIDTH,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
};
pub use styles::{
    button_primary, container_card, text_danger, text_input_default, text_input_error, text_muted,
};

use iced::Theme;

/// Creates the application theme for `mode`.
pub fn form_theme(mode: ThemeMode) -> Theme {
    Theme::custom(format!("Contact Form {}", mode.label()), form_palette(mode))
}
