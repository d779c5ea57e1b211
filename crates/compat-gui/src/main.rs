//! Board Compat Browser - Desktop GUI Application.
//!
//! Displays motherboard/CPU compatibility data for the Intel H110
//! chipset with live search, manufacturer filtering and expandable
//! per-board detail rows.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

mod app;
mod component;
mod constants;
mod message;
mod theme;
mod view;

use iced::{Size, window};

use app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!(
        "Starting {} v{}",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1100.0, 760.0),
            min_size: Some(Size::new(880.0, 560.0)),
            ..Default::default()
        })
        .run()
}
