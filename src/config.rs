//! Persistent application configuration model and defaults.

use std::path::PathBuf;

/// Root configuration persisted to `travelex.toml`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    #[serde(default)]
    /// Window preferences.
    pub ui: UiConfig,
    #[serde(default)]
    /// Package database location.
    pub storage: StorageConfig,
    #[serde(default)]
    /// Terminal logging preferences.
    pub logging: LoggingConfig,
}

/// UI preferences persisted between sessions.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UiConfig {
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Title of the advisory dialog shown on validation failures.
    #[serde(default = "default_advisory_title")]
    pub advisory_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StorageConfig {
    /// Overrides the default `packages.db` in the platform data directory.
    #[serde(default)]
    pub database_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_window_width() -> u32 {
    900
}

fn default_window_height() -> u32 {
    560
}

fn default_advisory_title() -> String {
    "Package".to_string()
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            advisory_title: default_advisory_title(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level, falling back to `Debug` for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.trim().parse().unwrap_or(log::LevelFilter::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");
        assert_eq!(config, Config::default());
        assert_eq!(config.ui.window_width, 900);
        assert_eq!(config.storage.database_file, None);
    }

    #[test]
    fn test_partial_sections_keep_missing_defaults() {
        let config: Config = toml::from_str(
            r#"
[ui]
window_width = 1200

[logging]
level = "warn"
"#,
        )
        .expect("partial config parses");
        assert_eq!(config.ui.window_width, 1200);
        assert_eq!(config.ui.window_height, 560);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_debug() {
        let config: Config = toml::from_str("[logging]\nlevel = \"loud\"\n").expect("parses");
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
    }
}
