//! Application state and the Elm-style update loop.

use std::path::PathBuf;

use contact_model::{FormModel, privacy};
use contact_view::{FORM_HEADING, render};
use iced::{Element, Task, Theme};

use crate::message::Message;
use crate::settings::Settings;
use crate::theme::{ThemeMode, form_theme};
use crate::view::view_form;

/// Main application struct.
pub struct App {
    form: FormModel,
    settings: Settings,
    /// Where theme changes are written; `None` keeps them in memory.
    settings_path: Option<PathBuf>,
}

impl App {
    /// Create the application, loading settings from the user's config directory.
    pub fn new() -> (Self, Task<Message>) {
        let path = Settings::config_path();
        let settings = Settings::load_from(&path);
        (Self::with_settings(settings, Some(path)), Task::none())
    }

    /// Create the application from already-loaded settings.
    pub fn with_settings(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        privacy::set_log_values(settings.developer.log_values);
        tracing::debug!(
            theme = %settings.display.theme_mode,
            log_values = settings.developer.log_values,
            "Settings applied"
        );
        Self {
            form: FormModel::new(),
            settings,
            settings_path,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.set_field(field, value);
            }
            Message::Submit => {
                let accepted = self.form.submit().is_accepted();
                tracing::debug!(accepted, "Submit handled");
            }
            Message::ThemeModeSelected(mode) => {
                self.settings.display.theme_mode = mode;
                self.persist_settings();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view_form(&render(&self.form), self.settings.display.theme_mode)
    }

    pub fn title(&self) -> String {
        FORM_HEADING.to_string()
    }

    pub fn theme(&self) -> Theme {
        form_theme(self.settings.display.theme_mode)
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.settings.display.theme_mode
    }

    fn persist_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(error) = self.settings.save_to(path) {
            tracing::error!(%error, "Failed to save settings");
        }
    }
}
