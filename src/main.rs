//! MyGedit - a minimal desktop text editor.
//!
//! One text area with file open/save dialogs, a menu bar and toolbar, and
//! a status bar showing the cursor position.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod error;
#[cfg(test)]
mod test_support;
mod ui;
mod utils;

use app::App;
use config::ConfigManager;
use eframe::NativeOptions;
use simplelog::{ConfigBuilder, LevelFilter, SimpleLogger};

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = SimpleLogger::init(level, log_config);
}

fn main() -> eframe::Result<()> {
    init_logging();

    let config_manager = ConfigManager::new();
    log::debug!("Settings file: {}", config_manager.get_config_file_path().display());
    let config = config_manager.load();

    // Configure native window options
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(format!("{} - {}", core::editor::APP_NAME, core::document::UNSAVED_NAME))
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    log::info!("{} starting", core::editor::APP_NAME);

    // Run the application
    eframe::run_native(
        core::editor::APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, config)))),
    )
}
