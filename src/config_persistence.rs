//! Loading, sanitizing, and persisting `travelex.toml`.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::{Config, UiConfig};

const MIN_WINDOW_WIDTH: u32 = 640;
const MIN_WINDOW_HEIGHT: u32 = 400;
const MAX_WINDOW_EDGE: u32 = 8_192;

pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("travelex.toml"))
}

pub fn default_database_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("travelex").join("packages.db"))
}

pub fn sanitize_config(config: Config) -> Config {
    Config {
        ui: UiConfig {
            window_width: config
                .ui
                .window_width
                .clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_EDGE),
            window_height: config
                .ui
                .window_height
                .clamp(MIN_WINDOW_HEIGHT, MAX_WINDOW_EDGE),
            advisory_title: config.ui.advisory_title,
        },
        ..config
    }
}

pub fn persist_config(config: &Config, config_file: &Path) {
    match toml::to_string(config) {
        Ok(config_text) => {
            if let Err(err) = std::fs::write(config_file, config_text) {
                log::error!(
                    "Failed to persist config to {}: {}",
                    config_file.display(),
                    err
                );
            }
        }
        Err(err) => {
            log::error!("Failed to serialize config: {}", err);
        }
    }
}

/// Reads the config file, creating it with defaults when missing.
/// Unreadable or invalid content falls back to defaults.
pub fn load_or_create_config(config_file: &Path) -> Config {
    if !config_file.exists() {
        info!(
            "Config file not found. Creating default config. path={}",
            config_file.display()
        );
        if let Some(parent) = config_file.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    err
                );
            }
        }
        let default_config = Config::default();
        persist_config(&default_config, config_file);
        return default_config;
    }

    let config = match std::fs::read_to_string(config_file) {
        Ok(config_content) => toml::from_str::<Config>(&config_content).unwrap_or_else(|err| {
            warn!(
                "Invalid config at {}, using defaults: {}",
                config_file.display(),
                err
            );
            Config::default()
        }),
        Err(err) => {
            warn!(
                "Failed to read config at {}, using defaults: {}",
                config_file.display(),
                err
            );
            Config::default()
        }
    };
    sanitize_config(config)
}
