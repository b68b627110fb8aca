//! Ringlet - an animated circular progress indicator
//! Built with iced; a demo screen feeds the indicator from a value field

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(480.0, 560.0))
        .antialiasing(true)
        .run()
}
