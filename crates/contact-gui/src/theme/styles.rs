//! Widget style functions.
//!
//! Style functions receive `&Theme` and read colors from its extended
//! palette, so they follow the selected light/dark mode:
//!
//! ```rust,ignore
//! button(text("Submit")).style(button_primary)
//! text_input("", value).style(text_input_default)
//! ```

use iced::widget::{button, container, text, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::spacing;

fn shadow(alpha: f32, offset_y: f32, blur_radius: f32) -> Shadow {
    Shadow {
        color: Color {
            a: alpha,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, offset_y),
        blur_radius,
    }
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - the submit action.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let (background, text_color, elevation) = match status {
        button::Status::Active => (palette.primary.base.color, palette.primary.base.text, 1.0),
        button::Status::Hovered => (palette.primary.strong.color, palette.primary.strong.text, 2.0),
        button::Status::Pressed => (palette.primary.weak.color, palette.primary.weak.text, 0.0),
        button::Status::Disabled => (
            palette.background.strong.color,
            palette.background.strong.text,
            0.0,
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: shadow(0.12, elevation, elevation * 2.0),
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - the submission summary.
pub fn container_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        shadow: shadow(0.08, 2.0, 8.0),
        text_color: None,
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let (border_color, border_width) = match status {
        text_input::Status::Active | text_input::Status::Disabled => {
            (palette.background.strong.color, spacing::BORDER_WIDTH_THIN)
        }
        text_input::Status::Hovered => (palette.primary.weak.color, spacing::BORDER_WIDTH_THIN),
        text_input::Status::Focused { .. } => {
            (palette.primary.base.color, spacing::BORDER_WIDTH_MEDIUM)
        }
    };

    text_input::Style {
        background: palette.background.base.color.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: palette.background.strong.text,
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

/// Text input style for a field with a failing rule.
pub fn text_input_error(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let mut style = text_input_default(theme, status);
    style.border.color = theme.extended_palette().danger.base.color;
    style.border.width = spacing::BORDER_WIDTH_MEDIUM;
    style
}

// =============================================================================
// TEXT STYLES
// =============================================================================

/// Muted text - field labels.
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

/// Danger text - validation messages.
pub fn text_danger(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}
