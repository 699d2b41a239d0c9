#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;


use iced::Size;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    iced::application(
        app::ScannerApp::build,
        app::ScannerApp::handle_update,
        app::ScannerApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::ScannerApp::current_theme)
    .window_size(Size::new(480.0, 760.0))
    .run()
}
