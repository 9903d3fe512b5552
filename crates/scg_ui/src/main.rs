//! Swing Coach GUI - Main entry point
//!
//! A desktop client for the AI Golf Coach analysis service: upload a
//! down-the-line and a face-on swing video, get back diagnosed faults and
//! biomechanical metrics.

use std::path::PathBuf;

use scg_core::config::ConfigManager;
use scg_core::logging::{init_tracing, LogLevel};

mod app;
mod handlers;
mod theme;
mod views;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for the log level)
    let config_path = default_config_path();
    let mut config = ConfigManager::new(&config_path);

    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    init_tracing(LogLevel::from_name(&config.settings().logging.level));

    tracing::info!("Swing Coach GUI starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", scg_core::version());
    tracing::info!("Analysis endpoint: {}", config.settings().server.endpoint);

    iced::application("Swing Coach", App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(iced::Size::new(980.0, 760.0))
        .run_with(move || App::new(config))
}
