//! Contact Form - GUI Library
//!
//! Desktop host for the contact form, built with Iced 0.14.0 using the Elm
//! architecture (State, Message, Update, View).
//!
//! The view does not build widgets from the model directly: it walks the
//! [`contact_view::Document`] rendered from the model, so the window shows
//! exactly the elements the rendering contract describes.

pub mod app;
pub mod component;
pub mod message;
pub mod settings;
pub mod theme;
pub mod view;
