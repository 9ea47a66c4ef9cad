mod app;
mod catalog;
mod config;
mod core;
mod theme;
mod ui;

use config::AppConfig;

fn main() -> iced::Result {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    if let Some(e) = config_error {
        tracing::warn!("Using default settings: {e}");
    }

    tracing::info!("ReelAdmin starting...");

    let window_size = (config.window_width, config.window_height);

    // Run the Iced application
    iced::application(
        move || app::App::new(config.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .subscription(app::App::subscription)
    .theme(app::App::theme)
    .window_size(window_size)
    .antialiasing(true)
    .run()
}
