//! Configuration management module.
//!
//! Reads optional appearance settings from a JSON file next to the
//! executable. The file is never written: editor state is not persisted.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "mygedit_config.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub font_size: f32,
    pub status_timeout_ms: u64,
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 900.0,
            window_height: 650.0,
            font_size: 14.0,
            status_timeout_ms: 2000,
            dark_mode: true,
        }
    }
}

impl Config {
    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.status_timeout_ms)
    }
}

/// Configuration manager for loading config.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        let config_path = Self::get_exe_directory().join(CONFIG_FILE_NAME);
        Self { config_path }
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Get the directory containing the executable.
    fn get_exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn get_config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration, falling back to defaults.
    pub fn load(&self) -> Config {
        match self.try_load() {
            Ok(Some(config)) => {
                log::info!("Loaded settings from {}", self.config_path.display());
                config
            }
            Ok(None) => Config::default(),
            Err(e) => {
                log::warn!("Ignoring settings file: {:#}", e);
                Config::default()
            }
        }
    }

    fn try_load(&self) -> anyhow::Result<Option<Config>> {
        if !self.config_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("reading {}", self.config_path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.config_path.display()))?;
        Ok(Some(config))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
