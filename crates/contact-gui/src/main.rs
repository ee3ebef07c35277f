//! Contact Form - Desktop GUI Application
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use contact_gui::app::App;
use contact_gui::settings::Settings;
use iced::{Size, window};
use tracing_subscriber::EnvFilter;

/// Application entry point.
pub fn main() -> iced::Result {
    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,contact_gui=info,contact_model=info")),
        )
        .init();

    tracing::info!("Starting Contact Form");

    let window_settings = Settings::load().window;

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(window_settings.width, window_settings.height),
            min_size: Some(Size::new(420.0, 560.0)),
            ..Default::default()
        })
        .run()
}
