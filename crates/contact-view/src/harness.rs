//! Mounts a form and drives it with user events.

use contact_model::{Field, FormModel};
use thiserror::Error;
use tracing::trace;

use crate::node::{Control, Node};
use crate::query::Screen;
use crate::render::render;

/// Event dispatch failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("element {0:?} does not accept text input")]
    NotEditable(String),

    #[error("element {0:?} is not interactive")]
    NotInteractive(String),
}

/// A mounted contact form.
///
/// Events are applied to the model synchronously; call [`Harness::screen`]
/// after an event to observe the re-rendered form.
#[derive(Debug, Clone, Default)]
pub struct Harness {
    form: FormModel,
}

impl Harness {
    /// Mount an empty form.
    pub fn render() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    /// Render the current state.
    pub fn screen(&self) -> Screen {
        Screen::new(render(&self.form))
    }

    /// Type `text` into a text control, one keystroke per character.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::NotEditable`] if `target` is not a text control.
    pub fn type_text(&mut self, target: &Node, text: &str) -> Result<(), HarnessError> {
        let field = editable_field(target)?;
        let mut value = self.form.value(field).to_string();
        for ch in text.chars() {
            value.push(ch);
            trace!(field = %field, "keystroke");
            self.form.set_field(field, value.clone());
        }
        Ok(())
    }

    /// Empty a text control.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::NotEditable`] if `target` is not a text control.
    pub fn clear(&mut self, target: &Node) -> Result<(), HarnessError> {
        let field = editable_field(target)?;
        self.form.set_field(field, String::new());
        Ok(())
    }

    /// Click an element. Clicking a text control only focuses it.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::NotInteractive`] if `target` has no control.
    pub fn click(&mut self, target: &Node) -> Result<(), HarnessError> {
        match target.control {
            Some(Control::Submit) => {
                self.form.submit();
                Ok(())
            }
            Some(Control::Input(_)) => Ok(()),
            None => Err(HarnessError::NotInteractive(target.text_content())),
        }
    }
}

fn editable_field(target: &Node) -> Result<Field, HarnessError> {
    target
        .field()
        .ok_or_else(|| HarnessError::NotEditable(target.text_content()))
}
