//! Color palettes for the contact form.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// All available modes for UI picker.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Create the Iced palette for `mode`.
///
/// Iced derives its `ExtendedPalette` (weak/strong variants) from this.
pub fn form_palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette {
            background: Color::from_rgb(0.97, 0.97, 0.98),
            text: Color::from_rgb(0.12, 0.13, 0.16),
            primary: Color::from_rgb(0.18, 0.42, 0.86),
            success: Color::from_rgb(0.16, 0.62, 0.38),
            warning: Color::from_rgb(0.93, 0.62, 0.10),
            danger: Color::from_rgb(0.80, 0.16, 0.22),
        },
        ThemeMode::Dark => Palette {
            background: Color::from_rgb(0.10, 0.11, 0.13),
            text: Color::from_rgb(0.92, 0.93, 0.95),
            primary: Color::from_rgb(0.40, 0.60, 0.98),
            success: Color::from_rgb(0.34, 0.78, 0.52),
            warning: Color::from_rgb(0.98, 0.74, 0.28),
            danger: Color::from_rgb(0.96, 0.42, 0.45),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_has_light_text() {
        let light = form_palette(ThemeMode::Light);
        let dark = form_palette(ThemeMode::Dark);
        assert!(dark.text.r > dark.background.r);
        assert!(light.text.r < light.background.r);
    }

    #[test]
    fn theme_mode_serializes_snake_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let encoded = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .unwrap();
        assert_eq!(encoded.trim(), "mode = \"dark\"");
        let decoded: Wrapper = toml::from_str("mode = \"light\"").unwrap();
        assert_eq!(decoded.mode, ThemeMode::Light);
    }
}
